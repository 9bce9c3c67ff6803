//! Content messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// Reload the active view
    Refresh,
    /// Clear the main boundary's fault and run its reset action
    ResetBoundary,
}
