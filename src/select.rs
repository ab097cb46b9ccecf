//! Release selection
//!
//! Applies the version constraint and the `--latest` policy to the package
//! index, producing the ordered list of releases whose files move on to the
//! file filter stage.

use crate::domain::{PackageIndex, Release, VersionConstraint};
use crate::error::SelectionError;

/// Select candidate releases from the index.
///
/// - no constraint, no latest: every release in the index
/// - constraint: releases satisfying the operator, in index order
/// - latest: the single maximum release among the survivors
///
/// An empty result is an error; the caller reports it with the requested
/// constraint.
pub fn select_releases<'a>(
    index: &'a PackageIndex,
    constraint: Option<&VersionConstraint>,
    latest: bool,
) -> Result<Vec<&'a Release>, SelectionError> {
    let candidates: Vec<&Release> = index
        .releases()
        .iter()
        .filter(|release| {
            constraint
                .map(|c| c.matches(&release.version))
                .unwrap_or(true)
        })
        .collect();

    let selected = if latest {
        // Releases are sorted ascending, so the maximum survivor is the last
        candidates.last().map(|release| vec![*release]).unwrap_or_default()
    } else {
        candidates
    };

    if selected.is_empty() {
        let requested = match (constraint, latest) {
            (Some(c), true) => format!("{} (latest)", c),
            (Some(c), false) => c.to_string(),
            (None, _) => "any version".to_string(),
        };
        return Err(SelectionError::no_matching_version(
            &index.package,
            requested,
        ));
    }

    Ok(selected)
}
