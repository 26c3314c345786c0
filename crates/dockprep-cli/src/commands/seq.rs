use crate::cli::SeqArgs;
use crate::error::Result;
use dockprep::structure::pdb_to_seq;
use tracing::info;

pub fn run(args: SeqArgs) -> Result<()> {
    let seq = pdb_to_seq(&args.input)?;
    info!("Extracted {} residues from {:?}", seq.len(), args.input);
    println!("{}", seq);
    Ok(())
}
