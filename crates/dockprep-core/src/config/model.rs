use super::ConfigError;
use super::paths::{resolve_existing, resolve_existing_path, resolve_new_dir};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON/YAML serialization for configuration models.
///
/// Blanket-implemented for every `Serialize + DeserializeOwned` type, so a
/// configuration struct picks these helpers up for free. JSON output is
/// 2-space indented; YAML output preserves struct field order (serde_yaml
/// never alphabetizes, and its safe parser has no tag-execution facility).
pub trait ConfigModel: Serialize + DeserializeOwned {
    /// Writes the model to a JSON file.
    fn write_json(&self, path: &Path) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Loads the model from a JSON file.
    fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Writes the model to a YAML file.
    fn write_yaml(&self, path: &Path) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_yaml::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Loads the model from a YAML file.
    fn from_yaml(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(BufReader::new(file))?)
    }
}

impl<T: Serialize + DeserializeOwned> ConfigModel for T {}

/// The docking section of the pipeline configuration.
///
/// Every field is optional; absent fields are omitted from serialized
/// output rather than written as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Job name, used to label outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Receptor structure the ligands are docked against. Must exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receptor_pdb: Option<PathBuf>,

    /// Small-molecule databases to screen. Each entry must exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_dbs: Option<Vec<PathBuf>>,

    /// Checkout of the pose-prediction tool. Must exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffdock_dir: Option<PathBuf>,

    /// Run output directory. Created fresh; an existing directory is an
    /// error so a run can never clobber a previous run's results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// How many top-ranked poses to keep per ligand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
}

/// Root configuration object for a docking run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub dock: DockConfig,
}

/// Argument bag consumed by [`PipelineConfig::from_args`].
///
/// Mirrors the whitelist of command-line fields the pipeline accepts; a
/// front-end fills in whichever fields its invocation supplied.
#[derive(Debug, Clone, Default)]
pub struct DockArgs {
    pub name: Option<String>,
    pub receptor_pdb: Option<PathBuf>,
    pub drug_dbs: Option<Vec<PathBuf>>,
    pub diffdock_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub top_n: Option<usize>,
}

impl PipelineConfig {
    /// Builds a configuration from an argument bag.
    ///
    /// Only the whitelisted fields are carried over, nested under `dock`;
    /// fields absent from the bag stay unset.
    pub fn from_args(args: &DockArgs) -> Self {
        Self {
            dock: DockConfig {
                name: args.name.clone(),
                receptor_pdb: args.receptor_pdb.clone(),
                drug_dbs: args.drug_dbs.clone(),
                diffdock_dir: args.diffdock_dir.clone(),
                output_dir: args.output_dir.clone(),
                top_n: args.top_n,
            },
        }
    }

    /// Runs the path validation pipeline over the configuration.
    ///
    /// Input paths (`receptor_pdb`, `drug_dbs` entries, `diffdock_dir`) are
    /// resolved and must exist; `output_dir` is created fresh and must not.
    /// Called once when the configuration is constructed.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        debug!("Validating configuration paths: {:?}", &self.dock);

        self.dock.receptor_pdb = resolve_existing(self.dock.receptor_pdb.take())?;
        self.dock.diffdock_dir = resolve_existing(self.dock.diffdock_dir.take())?;
        if let Some(dbs) = self.dock.drug_dbs.take() {
            self.dock.drug_dbs = Some(
                dbs.into_iter()
                    .map(resolve_existing_path)
                    .collect::<Result<Vec<_>, _>>()?,
            );
        }
        self.dock.output_dir = self.dock.output_dir.take().map(resolve_new_dir).transpose()?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_config() -> PipelineConfig {
        PipelineConfig {
            dock: DockConfig {
                name: Some("3c9t_screen".to_string()),
                receptor_pdb: Some(PathBuf::from("/data/3c9t.pdb")),
                drug_dbs: Some(vec![PathBuf::from("drugs/approved.sdf")]),
                diffdock_dir: None,
                output_dir: Some(PathBuf::from("out/3c9t")),
                top_n: Some(10),
            },
        }
    }

    #[test]
    fn json_round_trip_reconstructs_the_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample_config();
        config.write_json(&path).unwrap();
        let reloaded = PipelineConfig::from_json(&path).unwrap();

        assert_eq!(config, reloaded);
    }

    #[test]
    fn yaml_round_trip_reconstructs_the_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = sample_config();
        config.write_yaml(&path).unwrap();
        let reloaded = PipelineConfig::from_yaml(&path).unwrap();

        assert_eq!(config, reloaded);
    }

    #[test]
    fn json_output_is_indented_and_omits_absent_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = PipelineConfig::from_args(&DockArgs {
            name: Some("foo".to_string()),
            ..Default::default()
        });
        config.write_json(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("  \"dock\""));
        assert!(!text.contains("null"));
        assert!(!text.contains("receptor_pdb"));
    }

    #[test]
    fn yaml_output_preserves_field_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        sample_config().write_yaml(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let name_at = text.find("name:").unwrap();
        let receptor_at = text.find("receptor_pdb:").unwrap();
        let top_n_at = text.find("top_n:").unwrap();
        assert!(name_at < receptor_at && receptor_at < top_n_at);
    }

    #[test]
    fn from_args_with_only_a_name_leaves_other_fields_unset() {
        let config = PipelineConfig::from_args(&DockArgs {
            name: Some("foo".to_string()),
            ..Default::default()
        });

        assert_eq!(config.dock.name.as_deref(), Some("foo"));
        assert!(config.dock.receptor_pdb.is_none());
        assert!(config.dock.drug_dbs.is_none());
        assert!(config.dock.diffdock_dir.is_none());
        assert!(config.dock.output_dir.is_none());
        assert!(config.dock.top_n.is_none());
    }

    #[test]
    fn loading_without_a_dock_section_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert!(matches!(
            PipelineConfig::from_json(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn loading_malformed_json_fails_with_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            PipelineConfig::from_json(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn validate_resolves_inputs_and_creates_the_output_dir() {
        let dir = tempdir().unwrap();
        let receptor = dir.path().join("receptor.pdb");
        fs::write(&receptor, "ATOM").unwrap();
        let out = dir.path().join("run1/out");

        let config = PipelineConfig {
            dock: DockConfig {
                receptor_pdb: Some(receptor.clone()),
                output_dir: Some(out.clone()),
                ..Default::default()
            },
        }
        .validate()
        .unwrap();

        assert_eq!(
            config.dock.receptor_pdb.unwrap(),
            fs::canonicalize(&receptor).unwrap()
        );
        assert!(out.is_dir());
    }

    #[test]
    fn validate_rejects_a_missing_receptor() {
        let dir = tempdir().unwrap();
        let config = PipelineConfig {
            dock: DockConfig {
                receptor_pdb: Some(dir.path().join("missing.pdb")),
                ..Default::default()
            },
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFound(_))
        ));
    }
}
