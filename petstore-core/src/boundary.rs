//! Render-fault containment
//!
//! An [`ErrorBoundary`] wraps the render pass of one subtree. A fault raised
//! while rendering (an `Err(RenderFault)` or a panic) is captured and the
//! boundary yields a [`Fallback`] instead of the subtree until it is reset.
//! Siblings rendered through other boundaries, or outside any boundary, are
//! unaffected.
//!
//! The boundary only guards the closure passed to [`ErrorBoundary::render`].
//! Its own fallback is plain data rendered by the caller outside the guard,
//! and faults from event handlers or fetch callbacks never reach it: those
//! land in the owning controller's `Failed` state.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use thiserror::Error;

/// Message shown when a fault carries none
pub const UNKNOWN_FAULT_MESSAGE: &str = "An unknown error occurred";

/// Heading of every fallback
pub const FALLBACK_TITLE: &str = "Something went wrong.";

/// Label of the reset control
pub const RESET_LABEL: &str = "Try again";

/// An unrecoverable fault raised during a render pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or(UNKNOWN_FAULT_MESSAGE))]
pub struct RenderFault {
    message: Option<String>,
}

impl RenderFault {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.is_empty()).then_some(message),
        }
    }

    /// A fault without a message
    pub fn unknown() -> Self {
        Self { message: None }
    }

    /// Fault message, or the generic one
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(UNKNOWN_FAULT_MESSAGE)
    }

    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::new(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(message.clone())
        } else {
            Self::unknown()
        }
    }
}

/// What a faulted boundary displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallback {
    pub title: String,
    pub message: String,
    /// Label of the reset control, present only when a reset action is configured
    pub reset_label: Option<String>,
}

/// Result of rendering through a boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryOutput<T> {
    /// The subtree rendered normally
    Rendered(T),
    /// The subtree faulted; show this instead
    Fallback(Fallback),
}

impl<T> BoundaryOutput<T> {
    pub fn rendered(self) -> Option<T> {
        match self {
            Self::Rendered(value) => Some(value),
            Self::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Isolates render faults of one subtree.
///
/// `A` is the reset action handed back to the caller by [`reset`](Self::reset),
/// typically a message the host dispatches to reload data.
#[derive(Debug)]
pub struct ErrorBoundary<A = ()> {
    name: String,
    fault: Option<RenderFault>,
    reset_action: Option<A>,
}

impl<A: Clone> ErrorBoundary<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fault: None,
            reset_action: None,
        }
    }

    /// Offer a reset control that yields `action` when activated
    #[must_use]
    pub fn with_reset_action(mut self, action: A) -> Self {
        self.reset_action = Some(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the wrapped subtree.
    ///
    /// While the boundary holds a fault the closure is not run. A panic
    /// inside the closure is captured like an `Err`.
    pub fn render<T, F>(&mut self, render: F) -> BoundaryOutput<T>
    where
        F: FnOnce() -> Result<T, RenderFault>,
    {
        if let Some(fallback) = self.fallback() {
            return BoundaryOutput::Fallback(fallback);
        }

        let fault = match catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(output)) => return BoundaryOutput::Rendered(output),
            Ok(Err(fault)) => fault,
            Err(payload) => RenderFault::from_panic(payload.as_ref()),
        };

        log::error!("Error caught by boundary '{}': {fault}", self.name);
        let fallback = self.fallback_for(&fault);
        self.fault = Some(fault);
        BoundaryOutput::Fallback(fallback)
    }

    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Message of the captured fault
    pub fn fault_message(&self) -> Option<&str> {
        self.fault.as_ref().map(RenderFault::message)
    }

    pub fn has_reset_action(&self) -> bool {
        self.reset_action.is_some()
    }

    /// Fallback to display, if the boundary holds a fault
    pub fn fallback(&self) -> Option<Fallback> {
        self.fault.as_ref().map(|fault| self.fallback_for(fault))
    }

    /// Clear the fault so the next render attempts the subtree again.
    ///
    /// Returns the configured reset action for the caller to dispatch.
    pub fn reset(&mut self) -> Option<A> {
        if self.fault.take().is_some() {
            log::info!("Boundary '{}' reset", self.name);
        }
        self.reset_action.clone()
    }

    fn fallback_for(&self, fault: &RenderFault) -> Fallback {
        Fallback {
            title: FALLBACK_TITLE.to_string(),
            message: fault.message().to_string(),
            reset_label: self.reset_action.as_ref().map(|_| RESET_LABEL.to_string()),
        }
    }
}
