//! Bone-name normalization heuristics.
//!
//! Importers disambiguate colliding bone names by appending `_<digits>`
//! (e.g. `mixamorig:RightFoot_062`), and some rigs carry a tool namespace
//! prefix. Normalization derives the lookup keys under which a bone should
//! be discoverable: the suffix-stripped base name, and — when the namespace
//! marker is present — the bare name with namespace-and-marker removed.
//!
//! Pure functions over strings; no scene state involved.

/// Namespace marker prepended by Mixamo-style rigs.
pub const MIXAMO_NAMESPACE: &str = "mixamorig:";

/// Strip one trailing `_<digits>` run, if present.
///
/// `"RightFoot_062"` → `"RightFoot"`, `"Arm_1_2"` → `"Arm_1"`,
/// `"Arm2"` → `"Arm2"` (digits without the underscore are not a suffix).
pub fn strip_numeric_suffix(name: &str) -> &str {
    let trimmed = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.len() < name.len() && trimmed.ends_with('_') {
        &name[..trimmed.len() - 1]
    } else {
        name
    }
}

/// Everything after the last occurrence of `marker`, or `None` if the
/// marker does not occur in `name`.
pub fn strip_namespace<'a>(name: &'a str, marker: &str) -> Option<&'a str> {
    if marker.is_empty() {
        return None;
    }
    name.rfind(marker).map(|i| &name[i + marker.len()..])
}

/// Candidate lookup keys for a bone name, namespaced form first.
///
/// Always yields the suffix-stripped base; additionally yields the
/// namespace-stripped bare base when the marker occurs in it.
pub fn lookup_keys(name: &str, marker: &str) -> Vec<String> {
    let base = strip_numeric_suffix(name);
    let mut keys = vec![base.to_string()];
    if let Some(bare) = strip_namespace(base, marker) {
        keys.push(bare.to_string());
    }
    keys
}
