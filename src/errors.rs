//! # Application Error Handling

use crate::ontology::{GeneratorError, HierarchyError, IriError, OntologyError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error("cannot parse `{path}`: {source}")]
    ConfigFile {
        path: std::path::PathBuf,
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Iri(#[from] IriError),

    #[error(transparent)]
    Ontology(#[from] OntologyError),

    #[error("invalid ontology declaration: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    RdfXml(#[from] oxrdfxml::RdfXmlParseError),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}

impl Error {
    pub fn string(s: &str) -> Self {
        Self::Message(s.to_string())
    }
}
