use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "dockprep CLI - Utilities for a molecular docking pipeline: structure conversion, sequence extraction, SMILES checks, and affinity scoring.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the one-letter protein sequence from a PDB structure.
    Seq(SeqArgs),
    /// Convert an SDF ligand file to PDB via the external converter.
    Convert(ConvertArgs),
    /// Merge a receptor and a ligand structure into one complex PDB.
    Combine(CombineArgs),
    /// Write the protein-only subset of a structure.
    Clean(CleanArgs),
    /// Check whether a string is a valid SMILES structure.
    Smiles(SmilesArgs),
    /// Minimize and score a ligand against a receptor.
    Score(ScoreArgs),
    /// Create, inspect, and translate pipeline configuration files.
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct SeqArgs {
    /// Path to the input PDB structure.
    #[arg(value_name = "PDB")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input SDF ligand file.
    #[arg(value_name = "SDF")]
    pub input: PathBuf,

    /// Path for the converted PDB file. Defaults to the input path with a
    /// pdb extension.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Path to the receptor PDB structure.
    #[arg(value_name = "PROT")]
    pub protein: PathBuf,

    /// Path to the ligand PDB structure.
    #[arg(value_name = "LIG")]
    pub ligand: PathBuf,

    /// Path for the merged complex. Defaults to
    /// <prot label>_<lig label>.pdb next to the ligand.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Path to the input PDB structure.
    #[arg(value_name = "PDB")]
    pub input: PathBuf,

    /// Path for the protein-only output structure.
    #[arg(value_name = "OUT")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct SmilesArgs {
    /// Candidate SMILES string.
    #[arg(value_name = "SMILES")]
    pub smiles: String,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the receptor PDB structure.
    #[arg(short, long, value_name = "PDB")]
    pub receptor: PathBuf,

    /// Path to the ligand SDF file.
    #[arg(short, long, value_name = "SDF")]
    pub ligand: PathBuf,

    /// Name or path of the scoring binary.
    #[arg(long, default_value = dockprep::exec::GNINA_EXE, value_name = "EXE")]
    pub gnina: String,

    /// Stream the scoring tool's output to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a configuration file built from the given fields.
    Init {
        /// Destination path; the extension selects JSON or YAML.
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Job name.
        #[arg(long)]
        name: Option<String>,

        /// Receptor structure the ligands are docked against.
        #[arg(long, value_name = "PATH")]
        receptor_pdb: Option<PathBuf>,

        /// Small-molecule database; repeat for several.
        #[arg(long = "drug-db", value_name = "PATH")]
        drug_dbs: Vec<PathBuf>,

        /// Checkout of the pose-prediction tool.
        #[arg(long, value_name = "PATH")]
        diffdock_dir: Option<PathBuf>,

        /// Run output directory (created on validation).
        #[arg(long, value_name = "PATH")]
        output_dir: Option<PathBuf>,

        /// How many top-ranked poses to keep per ligand.
        #[arg(long, value_name = "INT")]
        top_n: Option<usize>,
    },
    /// Load a configuration, run path validation, and display it.
    Show {
        /// Path to the configuration file; the extension selects the parser.
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Translate a configuration between its JSON and YAML renditions.
    Convert {
        /// Source configuration file.
        #[arg(value_name = "IN")]
        input: PathBuf,

        /// Destination file; the extension selects the output format.
        #[arg(value_name = "OUT")]
        output: PathBuf,
    },
}
