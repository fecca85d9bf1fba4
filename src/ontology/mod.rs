//! Ontology domain: the aggregate, the declarative hierarchy builders, the
//! random individual generators and RDF/XML persistence.
//!
//! Everything here is synchronous and in-process; the aggregate validates
//! every reference when an entity is attached so a saved document never
//! mentions undeclared classes or properties.

pub mod catalog;
pub mod entities;
pub mod generator;
pub mod hierarchy;
pub mod rdf_xml;
pub mod value_objects;
pub mod vocab;

pub use entities::{Class, Individual, Ontology, OntologyError, OntologySummary, Property};
pub use generator::{create_individual, random_food, random_name, GeneratorError};
pub use hierarchy::{
    create_classes, create_properties, ClassDescriptor, ClassRegistry, HierarchyError,
    PropertyDescriptor, PropertyRegistry,
};
pub use value_objects::{Iri, IriError};
