//! View state and navigation intents

use serde::{Deserialize, Serialize};

/// Top-level display mode.
///
/// Owned by the [`Navigator`](crate::Navigator); everything else receives it as data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewState {
    /// Random batch of records
    #[default]
    List,
    /// One record by identifier
    Detail {
        #[serde(rename = "recordId")]
        record_id: String,
    },
}

impl ViewState {
    pub fn detail(record_id: impl Into<String>) -> Self {
        Self::Detail {
            record_id: record_id.into(),
        }
    }

    /// Record identifier of the detail view
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::Detail { record_id } => Some(record_id),
            Self::List => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }
}

/// A request to move through browser history.
///
/// Controllers and the presentation layer emit these; only the
/// [`Navigator`](crate::Navigator) touches the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Push the detail path of this record and show it
    ShowRecord(String),
    /// Go to the previous history entry
    Back,
    /// Go to the next history entry
    Forward,
}
