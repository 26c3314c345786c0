use crate::cli::ScoreArgs;
use crate::error::Result;
use dockprep::exec::score_affinity;
use std::fs::File;

pub fn run(args: ScoreArgs) -> Result<()> {
    let log = match &args.log {
        Some(path) => Some(File::create(path)?),
        None => None,
    };

    let best = score_affinity(&args.receptor, &args.ligand, &args.gnina, log.as_ref())?;
    println!("{} ({} atoms)", best.ident, best.atoms.len());
    Ok(())
}
