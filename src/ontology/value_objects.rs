use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use oxrdf::{NamedNode, NamedNodeRef};
use thiserror::Error;

/// Value object ensuring that supplied text represents a valid IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`] value object.
    ///
    /// The constructor rejects malformed identifiers so every class, property
    /// and individual of an ontology carries a canonical identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        NamedNode::new(value.as_str()).map_err(|_| IriError::Invalid {
            value: value.clone(),
        })?;
        Ok(Self { value })
    }

    /// Builds the identifier of an entity declared inside this ontology
    /// namespace, i.e. `<self>#<name>`.
    pub fn entity(&self, name: &str) -> Result<Self, IriError> {
        Self::new(format!("{}#{name}", self.value))
    }

    /// Returns the fragment following `#`, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.value.rsplit_once('#').map(|(_, fragment)| fragment)
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Borrows the identifier as an RDF named node.
    #[must_use]
    pub fn as_named_node(&self) -> NamedNodeRef<'_> {
        NamedNodeRef::new_unchecked(&self.value)
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NamedNodeRef<'_>> for Iri {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self {
            value: node.as_str().to_owned(),
        }
    }
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text could not be parsed as an IRI.
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use super::Iri;

    #[test]
    fn accepts_valid_iri() {
        let iri = Iri::new("https://test.org/menu").expect("valid IRI");
        assert_eq!(iri.as_str(), "https://test.org/menu");
    }

    #[test]
    fn rejects_invalid_iri() {
        let err = Iri::new("not an iri").expect_err("invalid IRI");
        assert!(matches!(err, super::IriError::Invalid { value } if value == "not an iri"));
    }

    #[test]
    fn entity_appends_fragment() {
        let ontology = Iri::new("https://test.org/menu").expect("valid IRI");
        let class = ontology.entity("Cocinero").expect("entity IRI");
        assert_eq!(class.as_str(), "https://test.org/menu#Cocinero");
        assert_eq!(class.fragment(), Some("Cocinero"));
        assert_eq!(ontology.fragment(), None);
    }

    #[test]
    fn entity_rejects_names_with_spaces() {
        let ontology = Iri::new("https://test.org/menu").expect("valid IRI");
        assert!(ontology.entity("tarta de queso").is_err());
    }
}
