//! Error types for the Nebula editor kit
//!
//! The helpers assume well-formed, non-null inputs supplied by the host
//! editor; errors are limited to the genuinely fallible edges (parsing a
//! hex color string, dereferencing a stale node key).

use std::fmt;

/// Result type for editor kit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Editor kit errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color string could not be parsed as `#rrggbb`
    InvalidColor(String),

    /// A node key no longer refers to a live scene-tree node
    InvalidNode(String),

    /// An operation was rejected (e.g. removing the tree root)
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build the named [`Error`] variant, logging it through `editor_error!`.
///
/// # Example
///
/// ```ignore
/// let node = tree.node(key)
///     .ok_or_else(|| editor_err!(InvalidNode, "nebula::Gizmo", "Parent node is gone"))?;
/// ```
#[macro_export]
macro_rules! editor_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::editor_error!($source, "{}", message);
        $crate::error::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function.
///
/// # Example
///
/// ```ignore
/// if tree.node(parent).is_none() {
///     editor_bail!(InvalidNode, "nebula::Gizmo", "Parent node is gone");
/// }
/// ```
#[macro_export]
macro_rules! editor_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::editor_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
