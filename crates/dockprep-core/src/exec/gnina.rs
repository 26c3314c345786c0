use super::ToolError;
use super::runner::run_logged;
use crate::structure::read_first_molecule;
use bio_files::Sdf;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// Default name of the docking/scoring binary, resolved via `PATH`.
pub const GNINA_EXE: &str = "gnina";

// Padding, in Angstroms, added around the ligand-derived search box.
const AUTOBOX_PADDING: u32 = 2;

/// Minimizes a ligand against a receptor and returns the best-scoring pose.
///
/// The scoring binary runs in minimization mode with the vinardo scoring
/// function, searching an autobox derived from the ligand itself. Its
/// output lands in a scoped temporary directory that is destroyed when the
/// call returns — on every exit path — so the scored pose is read fully
/// into memory first; the returned molecule does not depend on the scratch
/// files.
///
/// Combined tool output is streamed into `log`, or to this process's
/// stdout when no sink is given. Abort-on-failure is the caller's policy:
/// a failing tool surfaces as a typed error here.
pub fn score_affinity(
    receptor_pdb: &Path,
    ligand_sdf: &Path,
    gnina_exe: &str,
    log: Option<&File>,
) -> Result<Sdf, ToolError> {
    let scratch = tempfile::tempdir()?;
    let pose_name = ligand_sdf.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Ligand path has no file name: {}", ligand_sdf.display()),
        )
    })?;
    let output_sdf = scratch.path().join(pose_name);

    let command = format!(
        "{} --minimize --scoring vinardo -r {} -l {} --autobox_ligand {} --autobox_add {} -o {}",
        gnina_exe,
        receptor_pdb.display(),
        ligand_sdf.display(),
        ligand_sdf.display(),
        AUTOBOX_PADDING,
        output_sdf.display(),
    );
    run_logged(&command, None, log)?;

    let best = read_first_molecule(&output_sdf)?;
    info!(
        "Scored {} against {}: best pose has {} atoms",
        ligand_sdf.display(),
        receptor_pdb.display(),
        best.atoms.len()
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    // Stand-in for the scoring binary: finds its `-o` argument and writes a
    // one-record SDF there, like a ranked gnina output file.
    #[cfg(unix)]
    fn fake_gnina(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = r#"#!/bin/sh
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-o" ]; then out="$a"; fi
  prev="$a"
done
cat > "$out" <<'EOF'
ethanol
  fake-gnina

  3  2  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.5000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    2.1000    1.3000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0
  2  3  1  0
M  END
EOF
echo '$$$$' >> "$out"
echo 'minimization done'
"#;
        let path = dir.join("fake-gnina");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn returns_the_best_pose_after_the_scratch_dir_is_gone() {
        let dir = tempdir().unwrap();
        let receptor = dir.path().join("receptor.pdb");
        let ligand = dir.path().join("ligand.sdf");
        fs::write(&receptor, "").unwrap();
        fs::write(&ligand, "").unwrap();
        let gnina = fake_gnina(dir.path());
        let log = File::create(dir.path().join("score.log")).unwrap();

        let mol = score_affinity(&receptor, &ligand, &gnina.to_string_lossy(), Some(&log)).unwrap();

        // fully materialized: usable even though the temp dir was dropped
        assert_eq!(mol.atoms.len(), 3);
    }

    #[test]
    #[cfg(unix)]
    fn log_sink_sees_the_echoed_command() {
        let dir = tempdir().unwrap();
        let receptor = dir.path().join("receptor.pdb");
        let ligand = dir.path().join("ligand.sdf");
        fs::write(&receptor, "").unwrap();
        fs::write(&ligand, "").unwrap();
        let gnina = fake_gnina(dir.path());
        let log_path = dir.path().join("score.log");
        let log = File::create(&log_path).unwrap();

        score_affinity(&receptor, &ligand, &gnina.to_string_lossy(), Some(&log)).unwrap();
        drop(log);

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("--minimize --scoring vinardo"));
        assert!(content.contains("--autobox_add 2"));
        assert!(content.contains("minimization done"));
    }

    #[test]
    #[cfg(unix)]
    fn failing_scorer_surfaces_as_a_command_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let receptor = dir.path().join("receptor.pdb");
        let ligand = dir.path().join("ligand.sdf");
        fs::write(&receptor, "").unwrap();
        fs::write(&ligand, "").unwrap();
        let broken = dir.path().join("broken-gnina");
        fs::write(&broken, "#!/bin/sh\nexit 2\n").unwrap();
        fs::set_permissions(&broken, fs::Permissions::from_mode(0o755)).unwrap();

        let result = score_affinity(&receptor, &ligand, &broken.to_string_lossy(), None);
        assert!(matches!(result, Err(ToolError::CommandFailed { .. })));
    }
}
