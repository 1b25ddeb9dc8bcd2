//! Version and revision strings.
//!
//! Packaged programs carry versions like `2.36-r2` where the trailing
//! `-r<N>` (optionally `-r<N>p<M>`) is the distribution's revision.

use std::sync::LazyLock;

use regex::Regex;

/// Revision suffix: `r<N>` or `r<N>p<M>`.
static REVISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r[0-9]+(p[0-9]+)?$").expect("REVISION must compile")
});

/// Split `version-revision` into its two parts.
///
/// Returns the input unchanged with an empty revision when the last
/// `-`-separated component is not a revision.
///
/// The whole component must match `r<N>` or `r<N>p<M>`. Older tooling only
/// checked that it began with `r`, so `1.0-rc1` used to split into
/// `("1.0", "rc1")`; here it has no revision.
///
/// ```
/// use alien::version::split_version_revision;
///
/// assert_eq!(split_version_revision("2.36-r2"), ("2.36", "r2"));
/// assert_eq!(split_version_revision("1.0-rc1"), ("1.0-rc1", ""));
/// ```
pub fn split_version_revision(version_with_revision: &str) -> (&str, &str) {
    match version_with_revision.rsplit_once('-') {
        Some((version, revision)) if REVISION.is_match(revision) => (version, revision),
        _ => (version_with_revision, ""),
    }
}

/// Join a version and a revision with `-`.
///
/// An empty revision, or the `r<i64::MAX>` sentinel meaning "any
/// revision", leaves the version bare.
pub fn join_version_revision(version: &str, revision: &str) -> String {
    if revision.is_empty() || revision == unbounded_revision() {
        version.to_string()
    } else {
        format!("{}-{}", version, revision)
    }
}

/// Revision that sorts after every real revision.
pub fn unbounded_revision() -> String {
    format!("r{}", i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_revision() {
        assert_eq!(split_version_revision("5.8.8-r1"), ("5.8.8", "r1"));
    }

    #[test]
    fn splits_patched_revision() {
        assert_eq!(split_version_revision("1.2-r3p4"), ("1.2", "r3p4"));
    }

    #[test]
    fn keeps_versions_with_inner_dashes() {
        assert_eq!(
            split_version_revision("2008-10-20-r1"),
            ("2008-10-20", "r1")
        );
        assert_eq!(split_version_revision("2008-10-20"), ("2008-10-20", ""));
    }

    #[test]
    fn no_dash_means_no_revision() {
        assert_eq!(split_version_revision("r5"), ("r5", ""));
        assert_eq!(split_version_revision("1.0"), ("1.0", ""));
    }

    #[test]
    fn non_revision_suffix_is_kept() {
        assert_eq!(split_version_revision("1.0-rc2"), ("1.0-rc2", ""));
        assert_eq!(split_version_revision("1.0-r"), ("1.0-r", ""));
    }

    #[test]
    fn join_appends_revision() {
        assert_eq!(join_version_revision("1.0", "r2"), "1.0-r2");
    }

    #[test]
    fn join_skips_empty_and_unbounded() {
        assert_eq!(join_version_revision("1.0", ""), "1.0");
        assert_eq!(join_version_revision("1.0", &unbounded_revision()), "1.0");
    }

    #[test]
    fn split_then_join_restores_input() {
        for input in ["3.1-r7", "3.1", "0.9.8-r1p2"] {
            let (version, revision) = split_version_revision(input);
            assert_eq!(join_version_revision(version, revision), input);
        }
    }
}
