use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Suffix token marking a preview-channel version label.
pub const PREVIEW_SUFFIX: &str = "-PREVIEW";

/// Release track a version belongs to. Serialized with the history file's
/// wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "release")]
    Stable,
    #[serde(rename = "snapshot")]
    Preview,
}

impl Channel {
    /// Channel implied by a label: the preview suffix marks the preview track.
    pub fn of_label(label: &str) -> Self {
        if label.ends_with(PREVIEW_SUFFIX) {
            Channel::Preview
        } else {
            Channel::Stable
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Stable => write!(f, "release"),
            Channel::Preview => write!(f, "snapshot"),
        }
    }
}

/// A dotted three-component version with an optional preview suffix.
///
/// Constructed transiently for comparison; the raw label string is what gets
/// persisted everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpec {
    pub components: [u64; 3],
    pub preview: bool,
}

impl VersionSpec {
    /// Returns `None` unless the input is exactly three dot-separated
    /// unsigned integers, optionally followed by the preview suffix.
    pub fn parse(input: &str) -> Option<Self> {
        let preview = input.ends_with(PREVIEW_SUFFIX);
        let numeric = input.strip_suffix(PREVIEW_SUFFIX).unwrap_or(input);

        let mut parts = numeric.split('.');
        let mut components = [0u64; 3];
        for slot in &mut components {
            let part = parts.next()?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            *slot = part.parse().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            components,
            preview,
        })
    }
}

/// Whether `candidate` denotes a strictly later release than `reference`.
///
/// Comparison is lexicographic over the numeric triplet; on a full tie the
/// candidate wins only if it carries the preview suffix and the reference
/// does not (a preview build at the same triplet is a later point in the
/// history than its stable sibling). Malformed input on either side yields
/// `false`: this check only guards latest-pointer updates, so refusing the
/// update is the safe answer.
pub fn is_newer(reference: &str, candidate: &str) -> bool {
    let (Some(reference), Some(candidate)) =
        (VersionSpec::parse(reference), VersionSpec::parse(candidate))
    else {
        return false;
    };
    match candidate.components.cmp(&reference.components) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.preview && !reference.preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_triplet() {
        let v = VersionSpec::parse("41.78.16").unwrap();
        assert_eq!(v.components, [41, 78, 16]);
        assert!(!v.preview);
    }

    #[test]
    fn parses_preview_suffix() {
        let v = VersionSpec::parse("41.78.13-PREVIEW").unwrap();
        assert_eq!(v.components, [41, 78, 13]);
        assert!(v.preview);
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(VersionSpec::parse("1.2").is_none());
        assert!(VersionSpec::parse("1.2.3.4").is_none());
        assert!(VersionSpec::parse("1.2.x").is_none());
        assert!(VersionSpec::parse("1..3").is_none());
        assert!(VersionSpec::parse("").is_none());
        assert!(VersionSpec::parse("-PREVIEW").is_none());
    }

    #[test]
    fn patch_bump_is_newer() {
        assert!(is_newer("1.2.3", "1.2.4"));
    }

    #[test]
    fn equal_versions_are_not_newer() {
        assert!(!is_newer("1.2.3", "1.2.3"));
    }

    #[test]
    fn preview_breaks_the_tie_upward() {
        assert!(is_newer("1.2.3", "1.2.3-PREVIEW"));
    }

    #[test]
    fn stable_does_not_supersede_its_preview() {
        assert!(!is_newer("1.2.3-PREVIEW", "1.2.3"));
    }

    #[test]
    fn malformed_reference_is_not_newer() {
        assert!(!is_newer("1.2.x", "1.2.3"));
    }

    #[test]
    fn malformed_candidate_is_not_newer() {
        assert!(!is_newer("1.2.3", "next"));
    }

    #[test]
    fn major_component_dominates_later_ones() {
        // A larger minor or patch must not outrank a smaller major.
        assert!(!is_newer("2.0.0", "1.99.99"));
        assert!(is_newer("1.99.99", "2.0.0"));
    }

    #[test]
    fn minor_component_dominates_patch() {
        assert!(!is_newer("1.5.0", "1.4.99"));
    }

    #[test]
    fn channel_of_label() {
        assert_eq!(Channel::of_label("41.78.16"), Channel::Stable);
        assert_eq!(Channel::of_label("41.78.13-PREVIEW"), Channel::Preview);
    }

    #[test]
    fn channel_display_uses_wire_names() {
        assert_eq!(Channel::Stable.to_string(), "release");
        assert_eq!(Channel::Preview.to_string(), "snapshot");
    }
}
