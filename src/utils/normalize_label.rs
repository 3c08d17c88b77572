/// Normalizes a taxonomy label for matching.
///
/// Ex: `Tree Services - Pruning / Removal` -> `tree services   pruning   removal`
///
/// Interior runs of spaces are left as-is; everything downstream splits on
/// whitespace and tolerates them.
pub fn normalize_label(label: &str) -> String {
    let mut normalized = label.to_lowercase();
    for ch in ['-', '/', ',', '&'] {
        normalized = normalized.replace(ch, " ");
    }
    normalized.trim().to_string()
}
