//! Navigation messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// Move the list cursor up
    SelectPrevious,
    /// Move the list cursor down
    SelectNext,
    /// Open the record under the cursor
    OpenSelected,
    /// History back
    Back,
    /// History forward
    Forward,
}
