use crate::cli::CleanArgs;
use crate::error::Result;
use dockprep::structure::clean_pdb;

pub fn run(args: CleanArgs) -> Result<()> {
    let out = clean_pdb(&args.input, &args.output)?;
    println!("{}", out.display());
    Ok(())
}
