use crate::cli::CombineArgs;
use crate::error::Result;
use dockprep::structure::combine_pdb;

pub fn run(args: CombineArgs) -> Result<()> {
    let out = combine_pdb(&args.protein, &args.ligand, args.output.as_deref())?;
    println!("{}", out.display());
    Ok(())
}
