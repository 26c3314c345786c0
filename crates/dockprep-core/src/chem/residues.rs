use phf::{Map, phf_map};

/// Three-letter to one-letter amino acid codes.
///
/// Covers the twenty standard residues plus the non-standard and ambiguous
/// codes that show up in deposited structures: MSE (selenomethionine, mapped
/// to M since only the sulfur is replaced by selenium), PYL/SEC (pyrrolysine
/// and selenocysteine), and the ambiguity codes ASX, GLX, XAA, XLE.
pub static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A',
    "ARG" => 'R',
    "ASN" => 'N',
    "ASP" => 'D',
    "CYS" => 'C',
    "GLN" => 'Q',
    "GLU" => 'E',
    "GLY" => 'G',
    "HIS" => 'H',
    "ILE" => 'I',
    "LEU" => 'L',
    "LYS" => 'K',
    "MET" => 'M',
    "MSE" => 'M',
    "PHE" => 'F',
    "PRO" => 'P',
    "PYL" => 'O',
    "SER" => 'S',
    "SEC" => 'U',
    "THR" => 'T',
    "TRP" => 'W',
    "TYR" => 'Y',
    "VAL" => 'V',
    "ASX" => 'B',
    "GLX" => 'Z',
    "XAA" => 'X',
    "XLE" => 'J',
};

/// Looks up the one-letter code for a three-letter residue name.
///
/// Returns `None` for residue names outside the table; callers decide how to
/// render unknown residues (sequence extraction uses `-`).
pub fn one_letter(resname: &str) -> Option<char> {
    THREE_TO_ONE.get(resname.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_residues_map_to_expected_letters() {
        assert_eq!(one_letter("ALA"), Some('A'));
        assert_eq!(one_letter("GLY"), Some('G'));
        assert_eq!(one_letter("TRP"), Some('W'));
        assert_eq!(one_letter("LYS"), Some('K'));
    }

    #[test]
    fn non_standard_residues_are_covered() {
        assert_eq!(one_letter("MSE"), Some('M'));
        assert_eq!(one_letter("PYL"), Some('O'));
        assert_eq!(one_letter("SEC"), Some('U'));
        assert_eq!(one_letter("ASX"), Some('B'));
        assert_eq!(one_letter("GLX"), Some('Z'));
        assert_eq!(one_letter("XLE"), Some('J'));
    }

    #[test]
    fn unknown_names_return_none() {
        assert_eq!(one_letter("XYZ"), None);
        assert_eq!(one_letter(""), None);
        assert_eq!(one_letter("ala"), None);
    }

    #[test]
    fn lookup_trims_whitespace() {
        assert_eq!(one_letter(" ALA "), Some('A'));
    }

    #[test]
    fn table_holds_twenty_six_codes() {
        assert_eq!(THREE_TO_ONE.len(), 26);
    }
}
