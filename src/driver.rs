//! Builds the restaurant ontology, fills it with random individuals and saves it.

use std::path::PathBuf;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::{
    config::OntologySettings,
    ontology::{
        catalog, create_classes, create_individual, create_properties, random_food, random_name,
        rdf_xml, ClassDescriptor, ClassRegistry, Iri, Ontology, OntologySummary,
        PropertyDescriptor,
    },
    Error, Result,
};

/// Where the label of a generated individual comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelSource {
    /// `<first>_<last>` from the name catalog.
    Name,
    /// One dish of the given list.
    Food(&'static [&'static str]),
}

/// Individuals created on every round, in creation order.
pub const ROUND: [(&str, LabelSource); 11] = [
    ("Persona", LabelSource::Name),
    ("Comensal", LabelSource::Name),
    ("Cocinero", LabelSource::Name),
    ("Catador", LabelSource::Name),
    ("Repostero", LabelSource::Name),
    ("Cocinero", LabelSource::Name),
    ("Primero", LabelSource::Food(catalog::ENTRY_FOOD)),
    ("Segundo", LabelSource::Food(catalog::PRINCIPAL_FOOD)),
    ("Postre", LabelSource::Food(catalog::DESERTS)),
    ("Hipocalorica", LabelSource::Food(catalog::FIT_FOOD)),
    ("Vegetariana", LabelSource::Food(catalog::VEGETARIAN_FOOD)),
];

/// The people and food class hierarchies.
#[must_use]
pub fn class_declarations() -> Vec<ClassDescriptor> {
    vec![
        ClassDescriptor::root("Persona"),
        ClassDescriptor::child("Comensal", "Persona"),
        ClassDescriptor::child("Cocinero", "Persona"),
        ClassDescriptor::child("Catador", "Comensal"),
        ClassDescriptor::child("Repostero", "Cocinero"),
        ClassDescriptor::root("Restaurante"),
        ClassDescriptor::root("Comida"),
        ClassDescriptor::child("Primero", "Comida"),
        ClassDescriptor::child("Segundo", "Comida"),
        ClassDescriptor::child("Postre", "Comida"),
        ClassDescriptor::child("Hipocalorica", "Comida"),
        ClassDescriptor::child("Vegetariana", "Comida"),
    ]
}

/// Relations between people, restaurants and food.
#[must_use]
pub fn property_declarations() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::new("trabaja-en", "Cocinero", "Restaurante"),
        PropertyDescriptor::new("ofrece", "Restaurante", "Comida"),
        PropertyDescriptor::new("consume", "Comensal", "Comida"),
        PropertyDescriptor::new("preparado-por", "Comida", "Cocinero"),
        PropertyDescriptor::new("cocina", "Cocinero", "Comida"),
        PropertyDescriptor::new("especialista-en", "Repostero", "Postre").with_parent("cocina"),
    ]
}

/// Runs `iterations` rounds of [`ROUND`] against `ontology`.
///
/// # Errors
///
/// Fails when a class of [`ROUND`] is missing from `classes` or an individual
/// cannot be attached.
pub fn populate<R: Rng + ?Sized>(
    ontology: &mut Ontology,
    classes: &ClassRegistry,
    iterations: usize,
    rng: &mut R,
) -> Result<()> {
    for _ in 0..iterations {
        for (name, source) in ROUND {
            let class = classes
                .get(name)
                .ok_or_else(|| Error::Message(format!("class `{name}` is not declared")))?;
            match source {
                LabelSource::Name => {
                    create_individual(class, |_| Ok(random_name(rng)), ontology, None)?;
                }
                LabelSource::Food(dishes) => {
                    create_individual(
                        class,
                        |data| random_food(rng, data.unwrap_or_default()),
                        ontology,
                        Some(dishes),
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Declares the hierarchies of the ontology named `name` and populates it.
///
/// # Errors
///
/// Fails when `base_iri` followed by `name` is not a valid IRI or the
/// declarations are inconsistent.
pub fn build<R: Rng + ?Sized>(
    base_iri: &str,
    name: &str,
    iterations: usize,
    rng: &mut R,
) -> Result<Ontology> {
    let mut ontology = Ontology::new(Iri::new(format!("{base_iri}{name}"))?).with_label(name);
    let classes = create_classes(&class_declarations(), &mut ontology)?;
    create_properties(&property_declarations(), &classes, &mut ontology)?;
    populate(&mut ontology, &classes, iterations, rng)?;
    Ok(ontology)
}

/// The output file: `<path><name>.rdf`, by plain concatenation.
#[must_use]
pub fn output_path(path: &str, name: &str) -> PathBuf {
    PathBuf::from(format!("{path}{name}.rdf"))
}

/// Inputs of a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Output directory, used as a raw prefix of the file name.
    pub path: String,
    /// Ontology name.
    pub name: String,
    pub settings: OntologySettings,
}

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub path: PathBuf,
    /// Seed used for label generation; reuse it to reproduce the labels.
    pub seed: u64,
    pub summary: OntologySummary,
}

/// Builds, populates and saves an ontology.
///
/// # Errors
///
/// Fails on invalid names or when the output file cannot be written.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let seed = options.settings.seed.unwrap_or_else(rand::random);
    info!(
        name = %options.name,
        iterations = options.settings.iterations,
        seed,
        "ontology_population_started"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let ontology = build(
        &options.settings.base_iri,
        &options.name,
        options.settings.iterations,
        &mut rng,
    )?;

    let path = output_path(&options.path, &options.name);
    rdf_xml::save(&ontology, &path)?;

    let summary = OntologySummary::from(&ontology);
    info!(
        path = %path.display(),
        classes = summary.class_count,
        properties = summary.property_count,
        individuals = summary.individual_count,
        "ontology_population_finished"
    );
    Ok(RunReport {
        path,
        seed,
        summary,
    })
}
