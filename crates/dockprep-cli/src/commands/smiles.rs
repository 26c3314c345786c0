use crate::cli::SmilesArgs;
use crate::error::Result;
use dockprep::chem::validate_smiles;

pub fn run(args: SmilesArgs) -> Result<()> {
    if validate_smiles(&args.smiles) {
        println!("valid");
    } else {
        println!("invalid");
    }
    Ok(())
}
