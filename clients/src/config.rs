//! Run configuration.
//!
//! A run is configured by an optional TOML file, overridden field by field
//! by command-line flags:
//!
//! ```toml
//! constraints = ["IC-1", "IC-12", "19"]   # default: all 21
//! skip = ["IC-17"]
//! format = "json"                          # "text" (default) or "json"
//! normalize = true
//! parallel = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use qb_conformance::{ConstraintId, ValidateOptions};
use serde::Deserialize;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing with compacted IRIs.
    #[default]
    Text,
    /// One JSON document per input file.
    Json,
}

/// Settings read from a TOML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Constraints to run, by id. Absent means all.
    pub constraints: Option<Vec<String>>,
    /// Constraints to leave out.
    pub skip: Vec<String>,
    /// Output format.
    pub format: Option<OutputFormat>,
    /// Run the normalizer before validating.
    pub normalize: Option<bool>,
    /// Evaluate constraints in parallel.
    pub parallel: Option<bool>,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }
}

/// Command-line values that override the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--constraint`, repeatable.
    pub constraints: Vec<String>,
    /// `--skip`, repeatable.
    pub skip: Vec<String>,
    /// `--format`.
    pub format: Option<OutputFormat>,
    /// `--no-normalize`.
    pub no_normalize: bool,
    /// `--sequential`.
    pub sequential: bool,
}

/// The effective settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Constraints to evaluate and how.
    pub options: ValidateOptions,
    /// Output format.
    pub format: OutputFormat,
    /// Run the normalizer before validating.
    pub normalize: bool,
}

impl RunConfig {
    /// Merges file settings with command-line overrides.
    ///
    /// Constraints named on the command line replace the file's list; skips
    /// from both sources accumulate.
    ///
    /// # Errors
    ///
    /// Returns an error if any constraint id is not recognised.
    pub fn resolve(file: FileConfig, cli: Overrides) -> Result<Self> {
        let selected = if !cli.constraints.is_empty() {
            parse_ids(&cli.constraints)?
        } else if let Some(names) = &file.constraints {
            parse_ids(names)?
        } else {
            ConstraintId::ALL.to_vec()
        };
        let mut skipped = parse_ids(&file.skip)?;
        skipped.extend(parse_ids(&cli.skip)?);

        let constraints = selected
            .into_iter()
            .filter(|id| !skipped.contains(id))
            .collect();

        Ok(Self {
            options: ValidateOptions {
                constraints,
                parallel: !cli.sequential && file.parallel.unwrap_or(true),
            },
            format: cli.format.or(file.format).unwrap_or_default(),
            normalize: !cli.no_normalize && file.normalize.unwrap_or(true),
        })
    }
}

fn parse_ids(names: &[String]) -> Result<Vec<ConstraintId>> {
    names
        .iter()
        .map(|name| {
            name.parse::<ConstraintId>()
                .with_context(|| format!("Bad constraint id in selection: {}", name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_everything() -> Result<()> {
        let run = RunConfig::resolve(FileConfig::default(), Overrides::default())?;
        assert_eq!(run.options, ValidateOptions::default());
        assert_eq!(run.format, OutputFormat::Text);
        assert!(run.normalize);
        Ok(())
    }

    #[test]
    fn file_values_apply_and_cli_overrides() -> Result<()> {
        let file: FileConfig = toml::from_str(
            r#"
            constraints = ["IC-1", "ic12", "19"]
            skip = ["19"]
            format = "json"
            parallel = false
            "#,
        )?;
        let run = RunConfig::resolve(file.clone(), Overrides::default())?;
        assert_eq!(
            run.options.constraints,
            vec![ConstraintId::Ic1, ConstraintId::Ic12]
        );
        assert_eq!(run.format, OutputFormat::Json);
        assert!(!run.options.parallel);

        let cli = Overrides {
            constraints: vec!["IC-3".to_string()],
            format: Some(OutputFormat::Text),
            no_normalize: true,
            ..Overrides::default()
        };
        let run = RunConfig::resolve(file, cli)?;
        assert_eq!(run.options.constraints, vec![ConstraintId::Ic3]);
        assert_eq!(run.format, OutputFormat::Text);
        assert!(!run.normalize);
        Ok(())
    }

    #[test]
    fn rejects_unknown_ids_and_keys() {
        let bad = Overrides {
            skip: vec!["IC-40".to_string()],
            ..Overrides::default()
        };
        assert!(RunConfig::resolve(FileConfig::default(), bad).is_err());
        assert!(toml::from_str::<FileConfig>("colour = \"blue\"").is_err());
    }
}
