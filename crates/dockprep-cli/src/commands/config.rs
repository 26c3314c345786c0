use crate::cli::{ConfigArgs, ConfigCommands};
use crate::error::{CliError, Result};
use dockprep::config::{ConfigModel, DockArgs, PipelineConfig};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(CliError::Argument(format!(
            "Cannot tell JSON from YAML for '{}'; use a .json, .yaml, or .yml extension.",
            path.display()
        ))),
    }
}

fn load(path: &Path) -> Result<PipelineConfig> {
    match detect_format(path)? {
        Format::Json => Ok(PipelineConfig::from_json(path)?),
        Format::Yaml => Ok(PipelineConfig::from_yaml(path)?),
    }
}

fn store(config: &PipelineConfig, path: &Path) -> Result<()> {
    match detect_format(path)? {
        Format::Json => config.write_json(path)?,
        Format::Yaml => config.write_yaml(path)?,
    }
    Ok(())
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init {
            path,
            name,
            receptor_pdb,
            drug_dbs,
            diffdock_dir,
            output_dir,
            top_n,
        } => handle_init(
            path,
            DockArgs {
                name,
                receptor_pdb,
                drug_dbs: if drug_dbs.is_empty() {
                    None
                } else {
                    Some(drug_dbs)
                },
                diffdock_dir,
                output_dir,
                top_n,
            },
        ),
        ConfigCommands::Show { path } => handle_show(&path),
        ConfigCommands::Convert { input, output } => handle_convert(&input, &output),
    }
}

fn handle_init(path: PathBuf, args: DockArgs) -> Result<()> {
    let config = PipelineConfig::from_args(&args);
    store(&config, &path)?;
    info!("Wrote configuration to {:?}", path);
    println!("{}", path.display());
    Ok(())
}

fn handle_show(path: &Path) -> Result<()> {
    let config = load(path)?.validate()?;
    let rendered = serde_yaml::to_string(&config)
        .map_err(dockprep::config::ConfigError::Yaml)?;
    print!("{}", rendered);
    Ok(())
}

fn handle_convert(input: &Path, output: &Path) -> Result<()> {
    let config = load(input)?;
    store(&config, output)?;
    println!("{}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_then_convert_round_trips_between_formats() {
        let dir = tempdir().unwrap();
        let yaml = dir.path().join("config.yaml");
        let json = dir.path().join("config.json");

        handle_init(
            yaml.clone(),
            DockArgs {
                name: Some("demo".to_string()),
                top_n: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
        handle_convert(&yaml, &json).unwrap();

        let from_yaml = load(&yaml).unwrap();
        let from_json = load(&json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_json.dock.name.as_deref(), Some("demo"));
    }

    #[test]
    fn unknown_extension_is_an_argument_error() {
        let result = detect_format(Path::new("config.toml"));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
