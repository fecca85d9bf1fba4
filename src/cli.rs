//! Command line surface: flags, interactive prompts and the run report.
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use colored::Colorize;

use crate::{
    config::Config,
    driver::{self, RunOptions, RunReport},
    logger::{self, LogLevel},
    Error, Result,
};

pub const PATH_PROMPT: &str = "Ontology path, eg: /Users/jane/ontologies/: ";
pub const NAME_PROMPT: &str = "Ontology name: ";

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output directory. The file is written to `<path><name>.rdf`, so keep the trailing separator.
    #[arg(short, long)]
    pub path: Option<String>,

    /// Ontology name, appended to the base IRI
    #[arg(short, long)]
    pub name: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the random labels
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of population rounds
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Loads the configuration file, if any, and applies flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file is unreadable or invalid.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(seed) = self.seed {
            config.ontology.seed = Some(seed);
        }
        if let Some(iterations) = self.iterations {
            config.ontology.iterations = iterations;
        }
        if let Some(level) = self.log_level {
            config.logger.level = level;
        }
        Ok(config)
    }

    /// Resolves the run inputs, prompting on `output`/`input` for whatever
    /// was not passed as a flag.
    ///
    /// # Errors
    ///
    /// Returns an error when reading the answers fails or the name is empty.
    pub fn options<R: BufRead, W: Write>(
        &self,
        config: &Config,
        input: &mut R,
        output: &mut W,
    ) -> Result<RunOptions> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => prompt(PATH_PROMPT, input, output)?,
        };
        let name = match &self.name {
            Some(name) => name.clone(),
            None => prompt(NAME_PROMPT, input, output)?,
        };
        if name.is_empty() {
            return Err(Error::string("ontology name cannot be empty"));
        }

        Ok(RunOptions {
            path,
            name,
            settings: config.ontology.clone(),
        })
    }
}

/// Writes `question` and reads one answer line without its line terminator.
///
/// # Errors
///
/// Returns an error on I/O failure or when the input is already exhausted.
pub fn prompt<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<String> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(Error::Message(format!(
            "no answer for `{}`",
            question.trim_end_matches([':', ' '])
        )));
    }
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

/// Human readable run summary.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let mut out = format!(
        "{} {}\n",
        "ontology saved to".green(),
        report.path.display().to_string().bold()
    );
    out.push_str(&format!("  iri:         {}\n", report.summary.iri));
    out.push_str(&format!("  seed:        {}\n", report.seed));
    out.push_str(&format!("  classes:     {}\n", report.summary.class_count));
    out.push_str(&format!("  properties:  {}\n", report.summary.property_count));
    out.push_str(&format!(
        "  individuals: {}\n",
        report.summary.individual_count
    ));
    for (class, count) in &report.summary.individuals_per_class {
        out.push_str(&format!("    {}: {count}\n", class.cyan()));
    }
    out
}

/// Entry point used by the binary.
///
/// # Errors
///
/// Returns any configuration, prompt, generation or I/O error.
pub fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    logger::init(&config.logger)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let options = cli.options(&config, &mut stdin.lock(), &mut stdout)?;

    let report = driver::run(&options)?;
    print!("{}", render_report(&report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, io::Cursor};

    use super::*;
    use crate::ontology::{Iri, OntologySummary};

    #[test]
    fn prompts_for_missing_values() {
        let cli = Cli::default();
        let mut input = Cursor::new("/tmp/ontologies/\nmenu\n");
        let mut output = Vec::new();

        let options = cli
            .options(&Config::default(), &mut input, &mut output)
            .expect("options");

        assert_eq!(options.path, "/tmp/ontologies/");
        assert_eq!(options.name, "menu");
        assert_eq!(
            String::from_utf8(output).expect("utf-8"),
            format!("{PATH_PROMPT}{NAME_PROMPT}")
        );
    }

    #[test]
    fn flags_skip_prompts() {
        let cli = Cli::parse_from(["menu-onto", "--path", "out/", "--name", "carta"]);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let options = cli
            .options(&Config::default(), &mut input, &mut output)
            .expect("options");

        assert_eq!(options.path, "out/");
        assert_eq!(options.name, "carta");
        assert!(output.is_empty());
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let cli = Cli::parse_from(["menu-onto", "--path", "out/"]);
        let mut input = Cursor::new("");
        let err = cli
            .options(&Config::default(), &mut input, &mut Vec::new())
            .expect_err("no name");
        assert!(matches!(err, Error::Message(_)));
    }

    #[test]
    fn empty_name_is_rejected() {
        let cli = Cli::parse_from(["menu-onto", "--path", "out/"]);
        let mut input = Cursor::new("\n");
        assert!(cli
            .options(&Config::default(), &mut input, &mut Vec::new())
            .is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "menu-onto",
            "--seed",
            "9",
            "--iterations",
            "2",
            "--log-level",
            "debug",
        ]);
        let config = cli.config().expect("config");
        assert_eq!(config.ontology.seed, Some(9));
        assert_eq!(config.ontology.iterations, 2);
        assert_eq!(config.logger.level, LogLevel::Debug);
    }

    #[test]
    fn report_lists_every_class_count() {
        let individuals_per_class = BTreeMap::from([
            ("Cocinero".to_string(), 30),
            ("Persona".to_string(), 15),
            ("Postre".to_string(), 15),
        ]);
        let report = RunReport {
            path: PathBuf::from("/tmp/ontologies/menu.rdf"),
            seed: 42,
            summary: OntologySummary {
                iri: Iri::new("https://test.org/menu").expect("iri"),
                class_count: 12,
                property_count: 6,
                individual_count: 60,
                individuals_per_class,
            },
        };

        let rendered = render_report(&report);

        assert!(rendered.contains("/tmp/ontologies/menu.rdf"));
        assert!(rendered.contains("https://test.org/menu"));
        assert!(rendered.contains("seed:        42"));
        assert!(rendered.contains("individuals: 60"));
        for (class, count) in [("Cocinero", 30), ("Persona", 15), ("Postre", 15)] {
            let line = rendered
                .lines()
                .find(|line| line.contains(class))
                .expect("class line");
            assert!(line.ends_with(&format!(": {count}")));
        }
    }
}
