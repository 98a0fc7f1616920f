//! Argument-list length checks shared by every predicate.

use shapecmp_core::{Error, Result};
use tracing::debug;

/// Rejects a present argument list shorter than `min`.
///
/// Runs before any argument is touched, so a rejected call never drains a
/// cursor.
pub(crate) fn require_at_least(len: usize, min: usize, name: &str) -> Result<()> {
    if len < min {
        debug!(len, min, name, "rejecting argument list");
        return Err(Error::too_few(name, min));
    }
    Ok(())
}
