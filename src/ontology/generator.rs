//! Random label generators and individual creation.

use rand::{seq::IndexedRandom, Rng};
use thiserror::Error;
use tracing::trace;

use super::{
    catalog,
    entities::{Individual, Ontology, OntologyError},
    value_objects::Iri,
};

/// Errors raised while generating individuals.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("cannot pick a label from an empty data source")]
    EmptyDataSource,
    #[error("label `{label}` does not produce a valid identifier")]
    InvalidLabel { label: String },
    #[error(transparent)]
    Ontology(#[from] OntologyError),
}

/// Creates a random name with the last name separated by an underscore.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name = catalog::NAMES.choose(rng).copied().unwrap_or_default();
    let last_name = catalog::LAST_NAMES.choose(rng).copied().unwrap_or_default();
    format!("{name}_{last_name}")
}

/// Picks a random dish from the provided data.
///
/// # Errors
///
/// Returns [`GeneratorError::EmptyDataSource`] when `data` is empty.
pub fn random_food<R: Rng + ?Sized>(rng: &mut R, data: &[&str]) -> Result<String, GeneratorError> {
    data.choose(rng)
        .map(|dish| (*dish).to_string())
        .ok_or(GeneratorError::EmptyDataSource)
}

/// Instantiates one individual of `class` labelled by `generator`.
///
/// The generator receives `data` when a data source is supplied and `None`
/// otherwise. Labels are not required to be unique: an individual whose
/// identifier is already taken, by another individual or by a class or
/// property, gets a numbered identifier (`_2`, `_3`, ...).
///
/// # Errors
///
/// Propagates generator failures and rejects classes unknown to `ontology`.
pub fn create_individual<G>(
    class: &Iri,
    generator: G,
    ontology: &mut Ontology,
    data: Option<&[&str]>,
) -> Result<Iri, GeneratorError>
where
    G: FnOnce(Option<&[&str]>) -> Result<String, GeneratorError>,
{
    let label = generator(data)?;
    let id = individual_id(ontology, &label)?;

    let mut individual = Individual::new(id.clone(), label.as_str());
    individual.assert_type(class.clone());
    ontology.add_individual(individual)?;
    trace!(class = %class, individual = %id, label = %label, "individual_created");
    Ok(id)
}

fn individual_id(ontology: &mut Ontology, label: &str) -> Result<Iri, GeneratorError> {
    ontology
        .next_free_entity(&fragment_for(label))
        .map_err(|_| GeneratorError::InvalidLabel {
            label: label.to_string(),
        })
}

/// Turns a free text label into an IRI fragment, replacing every run of
/// non alphanumeric characters (other than `-`) with a single `_`.
fn fragment_for(label: &str) -> String {
    let mut fragment = String::with_capacity(label.len());
    for ch in label.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            fragment.push(ch);
        } else if !fragment.ends_with('_') {
            fragment.push('_');
        }
    }
    fragment
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::ontology::{entities::Class, vocab::owl};

    fn ontology_with_postre() -> (Ontology, Iri) {
        let mut ontology = Ontology::new(Iri::new("https://test.org/menu").expect("iri"));
        let postre = ontology.id().entity("Postre").expect("class iri");
        let mut class = Class::new(postre.clone(), "Postre");
        class.add_parent(Iri::from(owl::THING));
        ontology.add_class(class).expect("class");
        (ontology, postre)
    }

    #[test]
    fn random_name_joins_catalog_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = random_name(&mut rng);
        let (first, last) = name.split_once('_').expect("underscore separator");
        assert!(catalog::NAMES.contains(&first));
        assert!(catalog::LAST_NAMES.contains(&last));
    }

    #[test]
    fn random_food_picks_from_data() {
        let mut rng = StdRng::seed_from_u64(7);
        let dish = random_food(&mut rng, catalog::DESERTS).expect("dish");
        assert!(catalog::DESERTS.contains(&dish.as_str()));
    }

    #[test]
    fn random_food_rejects_empty_data() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            random_food(&mut rng, &[]),
            Err(GeneratorError::EmptyDataSource)
        );
    }

    #[test]
    fn same_seed_same_labels() {
        let labels = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| random_name(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(42), labels(42));
    }

    #[test]
    fn generator_receives_data_only_when_given() {
        let (mut ontology, postre) = ontology_with_postre();

        create_individual(
            &postre,
            |data| {
                assert_eq!(data, Some(&["Natillas"][..]));
                Ok("Natillas".to_string())
            },
            &mut ontology,
            Some(&["Natillas"]),
        )
        .expect("with data");

        create_individual(
            &postre,
            |data| {
                assert!(data.is_none());
                Ok("Flan".to_string())
            },
            &mut ontology,
            None,
        )
        .expect("without data");

        assert_eq!(ontology.individuals_of(&postre).count(), 2);
    }

    #[test]
    fn repeated_labels_create_distinct_individuals() {
        let (mut ontology, postre) = ontology_with_postre();
        let generate = |_: Option<&[&str]>| Ok::<_, GeneratorError>("Tarta de queso".to_string());

        let first = create_individual(&postre, generate, &mut ontology, None).expect("first");
        let second = create_individual(&postre, generate, &mut ontology, None).expect("second");
        let third = create_individual(&postre, generate, &mut ontology, None).expect("third");

        assert_eq!(first.fragment(), Some("Tarta_de_queso"));
        assert_eq!(second.fragment(), Some("Tarta_de_queso_2"));
        assert_eq!(third.fragment(), Some("Tarta_de_queso_3"));
        for id in [first, second, third] {
            assert_eq!(
                ontology.individual(&id).map(Individual::label),
                Some("Tarta de queso")
            );
        }
    }

    #[test]
    fn labels_never_reuse_class_identifiers() {
        let (mut ontology, postre) = ontology_with_postre();

        let id = create_individual(&postre, |_| Ok("Postre".to_string()), &mut ontology, None)
            .expect("individual");

        assert_ne!(id, postre);
        assert_eq!(id.fragment(), Some("Postre_2"));
        assert!(ontology.class(&postre).is_some());
        assert_eq!(
            ontology.individual(&id).map(Individual::label),
            Some("Postre")
        );
    }

    #[test]
    fn suffixes_continue_after_many_repeats() {
        let (mut ontology, postre) = ontology_with_postre();
        let generate = |_: Option<&[&str]>| Ok::<_, GeneratorError>("Flan".to_string());

        let ids = (0..50)
            .map(|_| create_individual(&postre, generate, &mut ontology, None).expect("individual"))
            .collect::<Vec<_>>();

        assert_eq!(ids[0].fragment(), Some("Flan"));
        assert_eq!(ids[49].fragment(), Some("Flan_50"));
        assert_eq!(ontology.individuals_of(&postre).count(), 50);
    }

    #[test]
    fn unknown_class_is_rejected() {
        let (mut ontology, _) = ontology_with_postre();
        let unknown = ontology.id().entity("Bebida").expect("iri");
        let err = create_individual(
            &unknown,
            |_| Ok("Horchata".to_string()),
            &mut ontology,
            None,
        )
        .expect_err("unknown class");
        assert!(matches!(
            err,
            GeneratorError::Ontology(OntologyError::MissingClass { .. })
        ));
    }

    #[test]
    fn fragments_collapse_separators() {
        assert_eq!(fragment_for("Bacalao al pil pil"), "Bacalao_al_pil_pil");
        assert_eq!(fragment_for("  Flan, casero "), "Flan_casero");
        assert_eq!(fragment_for("Lucia_Garcia"), "Lucia_Garcia");
    }
}
