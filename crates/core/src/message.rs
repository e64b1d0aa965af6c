//! Customer message status machine.
//!
//! Messages progress strictly forward: `unread -> read -> resolved`. There
//! is no reverse transition.

use crate::error::CoreError;

/// Message has not been opened yet.
pub const STATUS_UNREAD: &str = "unread";

/// Message has been opened by its recipient.
pub const STATUS_READ: &str = "read";

/// Message has been handled and closed.
pub const STATUS_RESOLVED: &str = "resolved";

/// All valid message status values, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[STATUS_UNREAD, STATUS_READ, STATUS_RESOLVED];

fn rank(status: &str) -> Option<usize> {
    VALID_STATUSES.iter().position(|s| *s == status)
}

/// Check whether a transition moves strictly forward.
pub fn can_advance(from: &str, to: &str) -> bool {
    match (rank(from), rank(to)) {
        (Some(f), Some(t)) => t > f,
        _ => false,
    }
}

/// Validate a status transition, rejecting unknown values and any move that
/// is not strictly forward.
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    if rank(from).is_none() {
        return Err(CoreError::Validation(format!(
            "Unknown message status '{from}'"
        )));
    }
    if rank(to).is_none() {
        return Err(CoreError::Validation(format!(
            "Unknown message status '{to}'"
        )));
    }
    if !can_advance(from, to) {
        return Err(CoreError::Conflict(format!(
            "Message status cannot move from '{from}' to '{to}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(can_advance(STATUS_UNREAD, STATUS_READ));
        assert!(can_advance(STATUS_UNREAD, STATUS_RESOLVED));
        assert!(can_advance(STATUS_READ, STATUS_RESOLVED));
    }

    #[test]
    fn reverse_transitions_are_rejected() {
        assert!(!can_advance(STATUS_READ, STATUS_UNREAD));
        assert!(!can_advance(STATUS_RESOLVED, STATUS_READ));
        assert!(!can_advance(STATUS_RESOLVED, STATUS_UNREAD));
    }

    #[test]
    fn self_transition_is_rejected() {
        assert!(!can_advance(STATUS_READ, STATUS_READ));
    }

    #[test]
    fn validate_transition_reports_conflict() {
        let err = validate_transition(STATUS_RESOLVED, STATUS_READ).unwrap_err();
        assert!(err.to_string().contains("cannot move"));
    }

    #[test]
    fn validate_transition_rejects_unknown_status() {
        assert!(validate_transition("archived", STATUS_READ).is_err());
        assert!(validate_transition(STATUS_READ, "archived").is_err());
    }
}
