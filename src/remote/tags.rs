//! Tag listing text processing
//!
//! Turns `git ls-remote --tags` output into sorted semantic versions:
//! `<hash>\t<ref>` lines are reduced to the ref name, `refs/tags/` and a
//! `v` directly before a digit are stripped, peeled entries (`^{}`) are
//! dropped and whatever does not parse as a version is ignored.

use crate::domain::SemanticVersion;
use regex::Regex;
use std::sync::LazyLock;

/// Leading `refs/tags/`, then a `v` only when a digit follows it
static TAG_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:refs/tags/)?(?:v([0-9]))?").unwrap());

/// Suffix of the peeled entry git prints for annotated tags
pub const DEREFERENCED_TAG_MARKER: &str = "^{}";

/// Extract the ref name (last tab-separated field) from a listing line
pub fn ref_name(line: &str) -> Option<&str> {
    line.split('\t')
        .next_back()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Strip the ref path and a version `v` prefix from a tag name
pub fn normalize_tag(tag: &str) -> String {
    TAG_PREFIX_RE.replace(tag.trim(), "${1}").into_owned()
}

/// Returns true for the peeled duplicate of an annotated tag
pub fn is_dereferenced(tag: &str) -> bool {
    tag.contains(DEREFERENCED_TAG_MARKER)
}

/// Normalized tag names from a listing, peeled entries removed
pub fn tag_names<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| ref_name(line.as_ref()).map(normalize_tag))
        .filter(|tag| !is_dereferenced(tag))
        .collect()
}

/// Versions found in a listing, sorted ascending
pub fn parse_listing<I, S>(lines: I) -> Vec<SemanticVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions: Vec<SemanticVersion> = tag_names(lines)
        .iter()
        .filter_map(|tag| SemanticVersion::parse(tag))
        .collect();
    versions.sort();
    versions
}
