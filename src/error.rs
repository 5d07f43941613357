use thiserror::Error;

/// Failures surfaced by a single dispatch call. None of them are fatal; the
/// host keeps pumping events after reporting one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Tab traversal landed on a cursor value that no tab stop claims.
    #[error("no tab stop with tab index {tab_index}")]
    FocusTargetNotFound { tab_index: i32 },
}
