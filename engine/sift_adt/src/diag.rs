//! Diagnostic payloads for `Res::Err`.
//!
//! A [`Diag`] is an opaque diagnostic message with a coarse category, not a
//! structured error code. The categories cover the labels programs built on
//! this engine conventionally report; anything else goes through
//! [`diagnostic`] with a free-form message.

use std::fmt;

/// Coarse category of a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagKind {
    /// Memory could not be obtained.
    AllocationFailed,
    /// A looked-up entity does not exist.
    NotFound,
    /// The operation is not permitted.
    PermissionDenied,
    /// The operation exceeded its time budget.
    Timeout,
    /// Anything else; the message carries the detail.
    Other,
}

/// The error payload of `Res::Err`: a category plus a display message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diag {
    kind: DiagKind,
    message: Box<str>,
}

impl Diag {
    fn new(kind: DiagKind, message: impl Into<Box<str>>) -> Self {
        Diag {
            kind,
            message: message.into(),
        }
    }

    /// The diagnostic's category.
    pub fn kind(&self) -> DiagKind {
        self.kind
    }

    /// The diagnostic's message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Allocation failed.
#[cold]
pub fn allocation_failed() -> Diag {
    Diag::new(DiagKind::AllocationFailed, "allocation failed")
}

/// Entity not found.
#[cold]
pub fn not_found() -> Diag {
    Diag::new(DiagKind::NotFound, "not found")
}

/// Permission denied.
#[cold]
pub fn permission_denied() -> Diag {
    Diag::new(DiagKind::PermissionDenied, "permission denied")
}

/// Operation timed out.
#[cold]
pub fn timeout() -> Diag {
    Diag::new(DiagKind::Timeout, "timeout")
}

/// Free-form diagnostic with a custom message.
#[cold]
pub fn diagnostic(message: impl Into<Box<str>>) -> Diag {
    Diag::new(DiagKind::Other, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_factories_carry_their_labels() {
        assert_eq!(allocation_failed().to_string(), "allocation failed");
        assert_eq!(not_found().to_string(), "not found");
        assert_eq!(permission_denied().to_string(), "permission denied");
        assert_eq!(timeout().to_string(), "timeout");
    }

    #[test]
    fn kinds_match_factories() {
        assert_eq!(not_found().kind(), DiagKind::NotFound);
        assert_eq!(timeout().kind(), DiagKind::Timeout);
        assert_eq!(diagnostic("disk full").kind(), DiagKind::Other);
    }

    #[test]
    fn custom_message_round_trips() {
        let diag = diagnostic("disk full");
        assert_eq!(diag.message(), "disk full");
        assert_eq!(diag.to_string(), "disk full");
    }

    #[test]
    fn equality_covers_kind_and_message() {
        assert_eq!(not_found(), not_found());
        assert_ne!(not_found(), timeout());
        assert_ne!(diagnostic("a"), diagnostic("b"));
    }
}
