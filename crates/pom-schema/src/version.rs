//! Classification of raw version strings as they appear in a POM.
//!
//! Nothing here resolves or interpolates a version; the helpers only
//! look at the literal text.

/// Detects Maven pre-release versions: SNAPSHOT, alpha, beta, RC and
/// milestone (`-M1`) qualifiers.
pub fn is_prerelease(version: &str) -> bool {
    version
        .split(['.', '-'])
        .skip(1)
        .any(|segment| is_prerelease_qualifier(&segment.to_uppercase()))
}

fn is_prerelease_qualifier(segment: &str) -> bool {
    if segment == "SNAPSHOT" {
        return true;
    }
    let alpha_prefix = ["ALPHA", "BETA", "RC", "CR"]
        .iter()
        .find(|q| segment.starts_with(**q))
        .map(|q| &segment[q.len()..]);
    if let Some(rest) = alpha_prefix {
        return rest.chars().all(|c| c.is_ascii_digit());
    }
    // Milestones: M, M1, M10
    segment
        .strip_prefix('M')
        .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
}

/// True when the text contains a `${...}` expression.
pub fn is_property_reference(value: &str) -> bool {
    !property_references(value).is_empty()
}

/// Names of the `${name}` expressions in `value`, in order of appearance.
pub fn property_references(value: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        if end > 0 {
            names.push(&after[..end]);
        }
        rest = &after[end + 1..];
    }
    names
}
