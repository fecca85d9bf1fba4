#![allow(clippy::missing_errors_doc)]
//! Builds a small restaurant OWL ontology (people, chefs, restaurants, food
//! categories), fills it with randomly generated individuals and saves it as
//! RDF/XML.
//!
//! ```no_run
//! use menu_ontology::{config::OntologySettings, driver};
//!
//! let report = driver::run(&driver::RunOptions {
//!     path: "/tmp/".to_string(),
//!     name: "menu".to_string(),
//!     settings: OntologySettings::default(),
//! })?;
//! println!("{}", report.path.display());
//! # Ok::<(), menu_ontology::Error>(())
//! ```

pub use self::errors::Error;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod logger;
pub mod ontology;

/// Application results options list
pub type Result<T, E = Error> = std::result::Result<T, E>;
