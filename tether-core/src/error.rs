// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types shared by every tether crate.
//!
//! Failures of caller-supplied asynchronous work travel through
//! [`Promise`](crate::Promise) with the caller's own error type; [`TetherError`]
//! only covers misuse of the reactive primitives themselves.

/// Root error type for tether operations.
#[derive(Debug, thiserror::Error)]
pub enum TetherError {
    /// The scalar or subject has been closed and accepts no further values.
    #[error("Observable is closed")]
    Closed,

    /// A promise was resolved a second time.
    ///
    /// The first outcome is kept; the second one is discarded.
    #[error("Promise is already resolved")]
    AlreadyResolved,

    /// A scheduler could not accept work.
    #[error("Scheduler error: {context}")]
    Scheduler {
        /// What the scheduler was asked to do
        context: String,
    },

    /// Invalid state encountered
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },
}

impl TetherError {
    /// Create a scheduler error with the given context
    pub fn scheduler(context: impl Into<String>) -> Self {
        Self::Scheduler {
            context: context.into(),
        }
    }

    /// Create an invalid state error with the given message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Returns `true` for [`TetherError::Closed`].
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Specialized Result type for tether operations
pub type Result<T> = std::result::Result<T, TetherError>;
