//! Patch version ordering and latest-release selection.
//!
//! Patch labels carry their version as a trailing numeric suffix:
//! `GRCh38.p14` -> `(14)`, `T2T-CHM13v2.0` -> `(2, 0)`. The key is parsed
//! from the label with its assembly-name prefix stripped, so a base
//! release whose label *is* the assembly name keys to `(0)` rather than
//! picking up digits embedded in the assembly name itself (`GRCh38` must
//! not key to `(38)` and outrank its own patches).
//!
//! Selection runs twice with the same rule: at build time, when the
//! pipeline stamps the `latest` tag, and at query time, when a token
//! resolves to several patch rows. Load-time validation in the store keeps
//! the two in agreement.

use crate::core::assembly::AssemblyRecord;

/// Version key of a patch label relative to its assembly name.
///
/// The key is the trailing dot-separated decimal run of the label's
/// version suffix; a suffix with no trailing digits keys to `(0)`.
#[must_use]
pub fn patch_version_key(assembly: &str, patch: &str) -> Vec<u64> {
    trailing_numeric_key(version_suffix(assembly, patch))
}

/// The portion of a patch label that carries the version: the label with
/// its assembly-name prefix (and a separating `.` or `-`) removed.
fn version_suffix<'a>(assembly: &str, patch: &'a str) -> &'a str {
    match patch.strip_prefix(assembly) {
        Some(suffix) => suffix.trim_start_matches(['.', '-']),
        None => patch,
    }
}

/// The trailing dot-separated decimal run of a string, as a sort key.
///
/// `"p14"` -> `[14]`, `"v2.0"` -> `[2, 0]`, `""` or `"alpha"` -> `[0]`.
fn trailing_numeric_key(suffix: &str) -> Vec<u64> {
    let run_start = suffix
        .rfind(|c: char| !c.is_ascii_digit() && c != '.')
        .map_or(0, |i| i + suffix[i..].chars().next().map_or(1, char::len_utf8));
    let run = suffix[run_start..].trim_matches('.');

    let key: Option<Vec<u64>> = if run.is_empty() {
        None
    } else {
        run.split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect()
    };
    key.unwrap_or_else(|| vec![0])
}

/// Pick the authoritative patch among the rows of one assembly.
///
/// Maximal version key wins; ties keep the earliest row (stable order, the
/// same tie-break a stable descending sort would give). Returns `None`
/// only for an empty slice.
#[must_use]
pub fn select_latest<'a>(rows: &[&'a AssemblyRecord]) -> Option<&'a AssemblyRecord> {
    let mut best: Option<(&AssemblyRecord, Vec<u64>)> = None;
    for row in rows {
        let key = patch_version_key(&row.assembly, &row.patch);
        match &best {
            Some((_, best_key)) if key <= *best_key => {}
            _ => best = Some((row, key)),
        }
    }
    best.map(|(row, _)| row)
}
