//! Declarative class and property hierarchy builders.
//!
//! Descriptors are processed in a single forward pass: a parent has to be
//! declared before any of its children. Referencing a parent that was never
//! registered is a configuration error rather than a silent fallback to the
//! hierarchy root.

use std::{collections::BTreeMap, marker::PhantomData};

use thiserror::Error;
use tracing::debug;

use super::entities::{Class, Ontology, OntologyError, Property};
use super::value_objects::Iri;
use super::vocab::owl;

/// Declares a class and, optionally, the name of its parent class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    pub parent: Option<String>,
}

impl ClassDescriptor {
    /// A class hanging directly from `owl:Thing`.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    /// A class specialising an already declared class.
    #[must_use]
    pub fn child(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
        }
    }
}

/// Declares an object property between two class names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub domain: String,
    pub range: String,
    pub parent: Option<String>,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, domain: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            range: range.into(),
            parent: None,
        }
    }

    /// Sets the parent property name.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Marker for registries of class names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassEntry {}

/// Marker for registries of property names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyEntry {}

/// Append-only lookup from declared names to identifiers.
///
/// The marker keeps class and property registries apart, so a property
/// registry cannot be passed where domain and range classes are resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry<K> {
    entries: BTreeMap<String, Iri>,
    kind: PhantomData<K>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            kind: PhantomData,
        }
    }
}

impl<K> Registry<K> {
    /// Returns the identifier registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Iri> {
        self.entries.get(name)
    }

    /// Returns `true` when `name` has been registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Iri)> {
        self.entries.iter().map(|(name, iri)| (name.as_str(), iri))
    }

    fn insert(&mut self, name: &str, iri: Iri) {
        self.entries.insert(name.to_string(), iri);
    }
}

/// Name to class identifier lookup returned by [`create_classes`].
pub type ClassRegistry = Registry<ClassEntry>;
/// Name to property identifier lookup returned by [`create_properties`].
pub type PropertyRegistry = Registry<PropertyEntry>;

/// Distinguishes class and property declarations in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Class,
    Property,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
            Self::Property => f.write_str("property"),
        }
    }
}

/// Configuration errors found while building a hierarchy.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("{kind} declaration with an empty name")]
    EmptyName { kind: EntityKind },
    #[error("{kind} `{name}` cannot be used as an IRI fragment")]
    InvalidName { kind: EntityKind, name: String },
    #[error("{kind} `{name}` is already declared")]
    Duplicate { kind: EntityKind, name: String },
    #[error("{kind} `{name}` references parent `{parent}` which is not declared before it")]
    UnknownParent {
        kind: EntityKind,
        name: String,
        parent: String,
    },
    #[error("property `{property}` references class `{class}` which is not declared")]
    UnknownClass { property: String, class: String },
    #[error(transparent)]
    Ontology(#[from] OntologyError),
}

/// Creates one class per descriptor inside `ontology`.
///
/// # Errors
///
/// Returns [`HierarchyError`] when a name is empty, repeated or not usable as
/// an IRI fragment, or when a parent was not declared earlier in `classes`.
pub fn create_classes(
    classes: &[ClassDescriptor],
    ontology: &mut Ontology,
) -> Result<ClassRegistry, HierarchyError> {
    let mut class_index = ClassRegistry::default();

    for descriptor in classes {
        let id = declare(EntityKind::Class, &descriptor.name, &class_index, ontology)?;
        let base = match &descriptor.parent {
            Some(parent) => class_index
                .get(parent)
                .cloned()
                .ok_or_else(|| HierarchyError::UnknownParent {
                    kind: EntityKind::Class,
                    name: descriptor.name.clone(),
                    parent: parent.clone(),
                })?,
            None => Iri::from(owl::THING),
        };

        let mut class = Class::new(id.clone(), descriptor.name.as_str());
        class.add_parent(base.clone());
        ontology.add_class(class)?;
        debug!(class = %descriptor.name, parent = %base, "class_created");
        class_index.insert(&descriptor.name, id);
    }

    Ok(class_index)
}

/// Creates one object property per descriptor inside `ontology`.
///
/// Domain and range names are resolved through `classes`.
///
/// # Errors
///
/// Returns [`HierarchyError`] for invalid or repeated names, unknown domain or
/// range classes and parents not declared earlier in `properties`.
pub fn create_properties(
    properties: &[PropertyDescriptor],
    classes: &ClassRegistry,
    ontology: &mut Ontology,
) -> Result<PropertyRegistry, HierarchyError> {
    let mut property_index = PropertyRegistry::default();

    for descriptor in properties {
        let id = declare(
            EntityKind::Property,
            &descriptor.name,
            &property_index,
            ontology,
        )?;
        let base = match &descriptor.parent {
            Some(parent) => property_index
                .get(parent)
                .cloned()
                .ok_or_else(|| HierarchyError::UnknownParent {
                    kind: EntityKind::Property,
                    name: descriptor.name.clone(),
                    parent: parent.clone(),
                })?,
            None => Iri::from(owl::TOP_OBJECT_PROPERTY),
        };
        let resolve = |class: &str| {
            classes
                .get(class)
                .cloned()
                .ok_or_else(|| HierarchyError::UnknownClass {
                    property: descriptor.name.clone(),
                    class: class.to_string(),
                })
        };

        let mut property = Property::new(id.clone(), descriptor.name.as_str());
        property.add_domain(resolve(&descriptor.domain)?);
        property.add_range(resolve(&descriptor.range)?);
        property.add_parent(base.clone());
        ontology.add_property(property)?;
        debug!(property = %descriptor.name, parent = %base, "property_created");
        property_index.insert(&descriptor.name, id);
    }

    Ok(property_index)
}

fn declare<K>(
    kind: EntityKind,
    name: &str,
    index: &Registry<K>,
    ontology: &Ontology,
) -> Result<Iri, HierarchyError> {
    if name.is_empty() {
        return Err(HierarchyError::EmptyName { kind });
    }
    let duplicate = || HierarchyError::Duplicate {
        kind,
        name: name.to_string(),
    };
    if index.contains(name) {
        return Err(duplicate());
    }
    let id = ontology
        .id()
        .entity(name)
        .map_err(|_| HierarchyError::InvalidName {
            kind,
            name: name.to_string(),
        })?;
    // Classes and properties share the ontology namespace.
    if ontology.is_declared(&id) {
        return Err(duplicate());
    }
    Ok(id)
}
