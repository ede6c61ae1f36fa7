//! Pieces of a rendered tree line

/// Marker placed between the indentation and an entry name.
pub const BRANCH: &str = "|-- ";

/// Text shown in place of a directory's children when listing is refused.
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Leading whitespace for an entry at `indent`.
pub fn indent_prefix(indent: usize) -> String {
    " ".repeat(indent)
}
