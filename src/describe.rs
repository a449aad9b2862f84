//! Human-readable rendering of protocol values.

/// Renders a protocol value as a short description for logs and diagnostics.
///
/// This is total: every value of an implementing type has a rendering, and values with no
/// assigned meaning (reserved, unassigned, or vendor-specific codes) render as the empty string.
/// The empty string is not a reliable "unknown" marker; use the type's `is_known()` when the
/// distinction matters.
pub trait Describe {
    /// Returns the canonical description of this value, or `""` if it has none.
    fn describe(&self) -> &'static str;
}
