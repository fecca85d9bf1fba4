use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

use super::value_objects::{Iri, IriError};
use super::vocab::owl;

/// Ontology class definition capturing parent relationships.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class {
    id: Iri,
    name: String,
    super_classes: BTreeSet<Iri>,
}

impl Class {
    /// Creates a new [`Class`] with the supplied identifier and short name.
    #[must_use]
    pub fn new(id: Iri, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            super_classes: BTreeSet::new(),
        }
    }

    /// Adds a new parent class relation.
    pub fn add_parent(&mut self, parent: Iri) -> bool {
        self.super_classes.insert(parent)
    }

    /// Returns the unique identifier of the class.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the short name the class was declared with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent classes in lexical order.
    #[must_use]
    pub fn parents(&self) -> &BTreeSet<Iri> {
        &self.super_classes
    }
}

/// Object property definition linking a domain class to a range class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    id: Iri,
    name: String,
    domains: BTreeSet<Iri>,
    ranges: BTreeSet<Iri>,
    super_properties: BTreeSet<Iri>,
}

impl Property {
    /// Creates a new property with the provided identifier and short name.
    #[must_use]
    pub fn new(id: Iri, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            domains: BTreeSet::new(),
            ranges: BTreeSet::new(),
            super_properties: BTreeSet::new(),
        }
    }

    /// Declares that the property applies to the supplied domain class.
    pub fn add_domain(&mut self, class: Iri) -> bool {
        self.domains.insert(class)
    }

    /// Declares that the property points to the supplied range class.
    pub fn add_range(&mut self, class: Iri) -> bool {
        self.ranges.insert(class)
    }

    /// Adds a parent property relation.
    pub fn add_parent(&mut self, parent: Iri) -> bool {
        self.super_properties.insert(parent)
    }

    /// Returns the property identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the short name the property was declared with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registered domain classes.
    #[must_use]
    pub fn domains(&self) -> &BTreeSet<Iri> {
        &self.domains
    }

    /// Returns the registered range classes.
    #[must_use]
    pub fn ranges(&self) -> &BTreeSet<Iri> {
        &self.ranges
    }

    /// Returns the parent properties in lexical order.
    #[must_use]
    pub fn parents(&self) -> &BTreeSet<Iri> {
        &self.super_properties
    }
}

/// An ontology individual with its class memberships and display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Individual {
    id: Iri,
    label: String,
    types: BTreeSet<Iri>,
}

impl Individual {
    /// Creates a new individual with the supplied identifier and label.
    #[must_use]
    pub fn new(id: Iri, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            types: BTreeSet::new(),
        }
    }

    /// Declares that the individual is an instance of the given class.
    pub fn assert_type(&mut self, class: Iri) -> bool {
        self.types.insert(class)
    }

    /// Returns the identifier of the individual.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the generated label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the declared types.
    #[must_use]
    pub fn types(&self) -> &BTreeSet<Iri> {
        &self.types
    }
}

/// Aggregates ontology classes, properties and individuals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ontology {
    id: Iri,
    label: Option<String>,
    classes: BTreeMap<Iri, Class>,
    properties: BTreeMap<Iri, Property>,
    individuals: BTreeMap<Iri, Individual>,
    next_suffix: BTreeMap<String, usize>,
}

impl Ontology {
    /// Creates a new ontology aggregate with the supplied identifier.
    #[must_use]
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            label: None,
            classes: BTreeMap::new(),
            properties: BTreeMap::new(),
            individuals: BTreeMap::new(),
            next_suffix: BTreeMap::new(),
        }
    }

    /// Sets a human readable label for the ontology.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a class to the ontology, enforcing unique identifiers and known parents.
    pub fn add_class(&mut self, class: Class) -> Result<(), OntologyError> {
        let id = class.id().clone();
        if self.classes.contains_key(&id) {
            return Err(OntologyError::DuplicateClass(id));
        }
        if self.is_declared(&id) {
            return Err(OntologyError::IdentifierInUse(id));
        }

        for parent in class.parents() {
            if !self.is_class(parent) {
                return Err(self.missing_class(parent));
            }
        }

        self.classes.insert(id, class);
        Ok(())
    }

    /// Adds a property to the ontology, validating references to known classes
    /// and parent properties.
    pub fn add_property(&mut self, property: Property) -> Result<(), OntologyError> {
        let id = property.id().clone();
        if self.properties.contains_key(&id) {
            return Err(OntologyError::DuplicateProperty(id));
        }
        if self.is_declared(&id) {
            return Err(OntologyError::IdentifierInUse(id));
        }

        for class in property.domains().iter().chain(property.ranges()) {
            if !self.is_class(class) {
                return Err(self.missing_class(class));
            }
        }
        for parent in property.parents() {
            if parent.as_named_node() != owl::TOP_OBJECT_PROPERTY
                && !self.properties.contains_key(parent)
            {
                return Err(OntologyError::MissingProperty {
                    ontology: self.id.clone(),
                    property: parent.clone(),
                });
            }
        }

        self.properties.insert(id, property);
        Ok(())
    }

    /// Adds an individual ensuring it references known classes.
    pub fn add_individual(&mut self, individual: Individual) -> Result<(), OntologyError> {
        let id = individual.id().clone();
        if self.individuals.contains_key(&id) {
            return Err(OntologyError::DuplicateIndividual(id));
        }
        if self.is_declared(&id) {
            return Err(OntologyError::IdentifierInUse(id));
        }

        for class in individual.types() {
            if !self.is_class(class) {
                return Err(self.missing_class(class));
            }
        }

        self.individuals.insert(id, individual);
        Ok(())
    }

    /// Returns the ontology identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns `true` when `id` names a class, a property or an individual.
    #[must_use]
    pub fn is_declared(&self, id: &Iri) -> bool {
        self.classes.contains_key(id)
            || self.properties.contains_key(id)
            || self.individuals.contains_key(id)
    }

    /// Returns the first free entity identifier for `fragment`, trying the
    /// bare fragment and then `_2`, `_3`, ...
    ///
    /// The last suffix handed out per fragment is remembered, so repeated
    /// requests do not rescan the suffixes already taken.
    ///
    /// # Errors
    ///
    /// Returns [`IriError`] when `fragment` does not form a valid IRI.
    pub fn next_free_entity(&mut self, fragment: &str) -> Result<Iri, IriError> {
        let mut suffix = self.next_suffix.get(fragment).copied().unwrap_or(1);
        loop {
            let candidate = if suffix == 1 {
                self.id.entity(fragment)?
            } else {
                self.id.entity(&format!("{fragment}_{suffix}"))?
            };
            suffix += 1;
            if !self.is_declared(&candidate) {
                self.next_suffix.insert(fragment.to_string(), suffix);
                return Ok(candidate);
            }
        }
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Retrieves a class by identifier.
    #[must_use]
    pub fn class(&self, id: &Iri) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Retrieves a property by identifier.
    #[must_use]
    pub fn property(&self, id: &Iri) -> Option<&Property> {
        self.properties.get(id)
    }

    /// Retrieves an individual by identifier.
    #[must_use]
    pub fn individual(&self, id: &Iri) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Returns all classes ordered by identifier.
    #[must_use]
    pub fn classes(&self) -> &BTreeMap<Iri, Class> {
        &self.classes
    }

    /// Returns all properties ordered by identifier.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<Iri, Property> {
        &self.properties
    }

    /// Returns all individuals ordered by identifier.
    #[must_use]
    pub fn individuals(&self) -> &BTreeMap<Iri, Individual> {
        &self.individuals
    }

    /// Returns the individuals directly typed with `class`.
    pub fn individuals_of<'a>(&'a self, class: &'a Iri) -> impl Iterator<Item = &'a Individual> {
        self.individuals
            .values()
            .filter(move |individual| individual.types().contains(class))
    }

    /// Returns the transitive closure of all parent classes for a given class,
    /// nearest first. `owl:Thing` closes every chain.
    pub fn ancestors_of(&self, class: &Iri) -> Result<Vec<Iri>, OntologyError> {
        let Some(start) = self.class(class) else {
            return Err(self.missing_class(class));
        };

        let mut visited = BTreeSet::new();
        let mut to_visit: VecDeque<Iri> = start.parents().iter().cloned().collect();
        let mut result = Vec::new();

        while let Some(current) = to_visit.pop_front() {
            if visited.insert(current.clone()) {
                result.push(current.clone());
                if let Some(parent) = self.class(&current) {
                    to_visit.extend(parent.parents().iter().cloned());
                }
            }
        }

        Ok(result)
    }

    fn is_class(&self, id: &Iri) -> bool {
        id.as_named_node() == owl::THING || self.classes.contains_key(id)
    }

    fn missing_class(&self, class: &Iri) -> OntologyError {
        OntologyError::MissingClass {
            ontology: self.id.clone(),
            class: class.clone(),
        }
    }
}

/// Counts describing an ontology without exposing the full aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OntologySummary {
    /// Identifier of the ontology.
    pub iri: Iri,
    /// Number of class declarations.
    pub class_count: usize,
    /// Number of property declarations.
    pub property_count: usize,
    /// Number of individuals.
    pub individual_count: usize,
    /// Number of individuals per class short name.
    pub individuals_per_class: BTreeMap<String, usize>,
}

impl From<&Ontology> for OntologySummary {
    fn from(ontology: &Ontology) -> Self {
        let mut individuals_per_class = BTreeMap::new();
        for individual in ontology.individuals().values() {
            for class in individual.types() {
                let name = ontology
                    .class(class)
                    .map_or_else(|| class.to_string(), |class| class.name().to_string());
                *individuals_per_class.entry(name).or_insert(0) += 1;
            }
        }

        Self {
            iri: ontology.id().clone(),
            class_count: ontology.classes().len(),
            property_count: ontology.properties().len(),
            individual_count: ontology.individuals().len(),
            individuals_per_class,
        }
    }
}

/// Errors raised when manipulating an ontology aggregate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OntologyError {
    /// Attempted to add a class with an existing identifier.
    #[error("class `{0}` already exists")]
    DuplicateClass(Iri),
    /// Attempted to add a property with an existing identifier.
    #[error("property `{0}` already exists")]
    DuplicateProperty(Iri),
    /// Attempted to add an individual with an existing identifier.
    #[error("individual `{0}` already exists")]
    DuplicateIndividual(Iri),
    /// The identifier already names an entity of another kind.
    #[error("`{0}` is already declared by another entity")]
    IdentifierInUse(Iri),
    /// Referenced class was not part of the ontology.
    #[error("class `{class}` does not exist in ontology `{ontology}`")]
    MissingClass { ontology: Iri, class: Iri },
    /// Referenced property was not part of the ontology.
    #[error("property `{property}` does not exist in ontology `{ontology}`")]
    MissingProperty { ontology: Iri, property: Iri },
}
