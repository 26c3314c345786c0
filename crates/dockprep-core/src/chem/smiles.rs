use purr::graph::{Atom, Builder};
use purr::read::read;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::error;

/// A candidate string failed to parse as SMILES.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid SMILES: {reason}")]
pub struct SmilesError {
    reason: String,
}

// Process-wide toggle for SMILES parse diagnostics. Atomic so flipping it is
// well-defined, but overlapping scopes on separate threads can still
// interleave enable/disable; upstream callers are single-threaded.
static SUPPRESS_DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

/// RAII guard that silences SMILES parse diagnostics for its lifetime.
///
/// The prior suppression state is captured on construction and restored on
/// drop, on every exit path including unwinding, so guards nest and reuse
/// safely. Not coordinated across threads.
#[must_use = "diagnostics stay audible unless the guard is held"]
pub struct SilencedDiagnostics {
    previous: bool,
}

impl SilencedDiagnostics {
    pub fn engage() -> Self {
        let previous = SUPPRESS_DIAGNOSTICS.swap(true, Ordering::SeqCst);
        Self { previous }
    }
}

impl Drop for SilencedDiagnostics {
    fn drop(&mut self) {
        SUPPRESS_DIAGNOSTICS.store(self.previous, Ordering::SeqCst);
    }
}

/// Whether SMILES parse diagnostics are currently silenced.
pub fn diagnostics_suppressed() -> bool {
    SUPPRESS_DIAGNOSTICS.load(Ordering::SeqCst)
}

/// Parses a SMILES string into its molecule graph.
///
/// Rejections are logged at error level unless a [`SilencedDiagnostics`]
/// guard is active.
pub fn parse_smiles(smiles: &str) -> Result<Vec<Atom>, SmilesError> {
    let mut builder = Builder::new();

    let outcome = read(smiles, &mut builder, None)
        .map_err(|e| SmilesError {
            reason: format!("{:?}", e),
        })
        .and_then(|_| {
            builder.build().map_err(|e| SmilesError {
                reason: format!("{:?}", e),
            })
        });

    if let Err(e) = &outcome {
        if !diagnostics_suppressed() {
            error!("SMILES rejected: {}: {}", smiles, e);
        }
    }

    outcome
}

/// Checks whether a candidate string is a valid SMILES structure.
///
/// Parse diagnostics are silenced for the duration of the call and the
/// prior suppression state is restored afterwards. Invalid input is a
/// normal `false`, never an error.
pub fn validate_smiles(smiles: &str) -> bool {
    let _guard = SilencedDiagnostics::engage();
    match parse_smiles(smiles) {
        Ok(atoms) => !atoms.is_empty(),
        Err(_) => false,
    }
}
