use crate::cli::ConvertArgs;
use crate::error::Result;
use dockprep::exec::sdf_to_pdb;

pub fn run(args: ConvertArgs) -> Result<()> {
    let out = sdf_to_pdb(&args.input, args.output.as_deref())?;
    println!("{}", out.display());
    Ok(())
}
