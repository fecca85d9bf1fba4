//! RDF/XML persistence for ontology aggregates.
//!
//! The aggregate is flattened into OWL triples (`owl:Ontology`, `owl:Class`,
//! `owl:ObjectProperty`, `owl:NamedIndividual`) and written with the
//! `oxrdfxml` serializer.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use oxrdf::{
    vocab::{rdf, rdfs},
    Graph, Literal, NamedNode, Triple,
};
use oxrdfxml::{RdfXmlParser, RdfXmlSerializer};
use tracing::info;

use super::{entities::Ontology, value_objects::Iri, vocab};
use crate::Result;

/// Flattens the aggregate into triples, ontology header first, then classes,
/// properties and individuals in identifier order.
#[must_use]
pub fn to_triples(ontology: &Ontology) -> Vec<Triple> {
    let named = |iri: &Iri| NamedNode::from(iri.as_named_node());
    let mut triples = Vec::new();

    let header = named(ontology.id());
    triples.push(Triple::new(
        header.clone(),
        rdf::TYPE.into_owned(),
        vocab::owl::ONTOLOGY.into_owned(),
    ));
    if let Some(label) = ontology.label() {
        triples.push(Triple::new(
            header,
            rdfs::LABEL.into_owned(),
            Literal::new_simple_literal(label),
        ));
    }

    for class in ontology.classes().values() {
        let subject = named(class.id());
        triples.push(Triple::new(
            subject.clone(),
            rdf::TYPE.into_owned(),
            vocab::owl::CLASS.into_owned(),
        ));
        for parent in class.parents() {
            triples.push(Triple::new(
                subject.clone(),
                rdfs::SUB_CLASS_OF.into_owned(),
                named(parent),
            ));
        }
    }

    for property in ontology.properties().values() {
        let subject = named(property.id());
        triples.push(Triple::new(
            subject.clone(),
            rdf::TYPE.into_owned(),
            vocab::owl::OBJECT_PROPERTY.into_owned(),
        ));
        for parent in property.parents() {
            triples.push(Triple::new(
                subject.clone(),
                rdfs::SUB_PROPERTY_OF.into_owned(),
                named(parent),
            ));
        }
        for domain in property.domains() {
            triples.push(Triple::new(
                subject.clone(),
                rdfs::DOMAIN.into_owned(),
                named(domain),
            ));
        }
        for range in property.ranges() {
            triples.push(Triple::new(
                subject.clone(),
                rdfs::RANGE.into_owned(),
                named(range),
            ));
        }
    }

    for individual in ontology.individuals().values() {
        let subject = named(individual.id());
        triples.push(Triple::new(
            subject.clone(),
            rdf::TYPE.into_owned(),
            vocab::owl::NAMED_INDIVIDUAL.into_owned(),
        ));
        for class in individual.types() {
            triples.push(Triple::new(
                subject.clone(),
                rdf::TYPE.into_owned(),
                named(class),
            ));
        }
        triples.push(Triple::new(
            subject,
            rdfs::LABEL.into_owned(),
            Literal::new_simple_literal(individual.label()),
        ));
    }

    triples
}

/// Serializes `ontology` as RDF/XML into `writer` and hands the writer back.
///
/// # Errors
///
/// Returns an error when writing to `writer` fails.
pub fn write<W: Write>(ontology: &Ontology, writer: W) -> io::Result<W> {
    let mut serializer = RdfXmlSerializer::new();
    for (prefix, namespace) in vocab::PREFIXES {
        serializer = serializer
            .with_prefix(prefix, namespace)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    }

    let mut serializer = serializer.for_writer(writer);
    for triple in &to_triples(ontology) {
        serializer.serialize_triple(triple)?;
    }
    serializer.finish()
}

/// Saves `ontology` as an RDF/XML document at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn save(ontology: &Ontology, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = write(ontology, BufWriter::new(file))?;
    writer.flush()?;
    info!(
        path = %path.display(),
        ontology = %ontology.id(),
        individuals = ontology.individuals().len(),
        "ontology_saved"
    );
    Ok(())
}

/// Parses an RDF/XML document into an in-memory graph.
///
/// # Errors
///
/// Returns an error when `reader` fails or the document is not valid RDF/XML.
pub fn read<R: Read>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for triple in RdfXmlParser::new().for_reader(reader) {
        graph.insert(&triple?);
    }
    Ok(graph)
}

/// Loads a previously saved RDF/XML file.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or parsed.
pub fn load(path: &Path) -> Result<Graph> {
    read(BufReader::new(File::open(path)?))
}
