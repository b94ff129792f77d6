//! Delete-account confirmation flow.

use crate::service::ServiceError;

use super::Ticket;

/// State of the delete confirmation modal.
///
/// Replaces the pair "modal visible" / "submitting": a submission without a
/// visible modal cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    /// Modal hidden.
    #[default]
    Closed,
    /// Modal shown, waiting for the user to confirm or cancel.
    Open,
    /// User confirmed; deletion request `ticket` is in flight.
    Submitting { ticket: Ticket },
    /// Last attempt failed; modal stays open showing `error`.
    Failed { error: ServiceError },
}

/// Result of applying a completion to the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deletion succeeded, modal closed.
    Deleted,
    /// Deletion failed, modal left open with the error.
    Failed,
    /// Completion did not match the request in flight and was dropped.
    Stale,
}

impl DeleteFlow {
    /// True while the modal is displayed.
    pub fn is_visible(&self) -> bool {
        !matches!(self, DeleteFlow::Closed)
    }

    /// True while a deletion request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, DeleteFlow::Submitting { .. })
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            DeleteFlow::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Shows the modal. Returns false if it was already visible.
    pub fn open(&mut self) -> bool {
        if self.is_visible() {
            return false;
        }
        *self = DeleteFlow::Open;
        true
    }

    /// Hides the modal. Refused (returns false) while submitting.
    pub fn close(&mut self) -> bool {
        match self {
            DeleteFlow::Open | DeleteFlow::Failed { .. } => {
                *self = DeleteFlow::Closed;
                true
            }
            DeleteFlow::Closed | DeleteFlow::Submitting { .. } => false,
        }
    }

    /// Starts submission `ticket`. Only valid from `Open` or `Failed` (retry).
    pub fn submit(&mut self, ticket: Ticket) -> bool {
        match self {
            DeleteFlow::Open | DeleteFlow::Failed { .. } => {
                *self = DeleteFlow::Submitting { ticket };
                true
            }
            DeleteFlow::Closed | DeleteFlow::Submitting { .. } => false,
        }
    }

    /// Applies the completion of request `ticket`.
    pub fn finish(&mut self, ticket: Ticket, result: Result<(), ServiceError>) -> DeleteOutcome {
        match self {
            DeleteFlow::Submitting { ticket: current } if *current == ticket => match result {
                Ok(()) => {
                    *self = DeleteFlow::Closed;
                    DeleteOutcome::Deleted
                }
                Err(error) => {
                    *self = DeleteFlow::Failed { error };
                    DeleteOutcome::Failed
                }
            },
            _ => DeleteOutcome::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_cancel() {
        let mut flow = DeleteFlow::default();
        assert!(!flow.is_visible());
        assert!(flow.open());
        assert!(flow.is_visible());
        assert!(!flow.is_submitting());
        assert!(!flow.open());
        assert!(flow.close());
        assert_eq!(flow, DeleteFlow::Closed);
        assert!(!flow.close());
    }

    #[test]
    fn submit_requires_open_modal() {
        let mut flow = DeleteFlow::Closed;
        assert!(!flow.submit(Ticket(1)));
        assert_eq!(flow, DeleteFlow::Closed);
    }

    #[test]
    fn success_closes_modal() {
        let mut flow = DeleteFlow::Open;
        assert!(flow.submit(Ticket(1)));
        assert!(flow.is_visible());
        assert!(flow.is_submitting());

        assert_eq!(flow.finish(Ticket(1), Ok(())), DeleteOutcome::Deleted);
        assert!(!flow.is_visible());
        assert!(!flow.is_submitting());
    }

    #[test]
    fn no_reentrant_submit() {
        let mut flow = DeleteFlow::Open;
        assert!(flow.submit(Ticket(1)));
        assert!(!flow.submit(Ticket(2)));
        assert_eq!(flow, DeleteFlow::Submitting { ticket: Ticket(1) });
    }

    #[test]
    fn close_refused_while_submitting() {
        let mut flow = DeleteFlow::Submitting { ticket: Ticket(3) };
        assert!(!flow.close());
        assert!(flow.is_submitting());
    }

    #[test]
    fn failure_keeps_modal_open_and_allows_retry() {
        let mut flow = DeleteFlow::Open;
        flow.submit(Ticket(1));
        assert_eq!(
            flow.finish(Ticket(1), Err(ServiceError::Unauthorized)),
            DeleteOutcome::Failed
        );
        assert!(flow.is_visible());
        assert!(!flow.is_submitting());
        assert_eq!(flow.error(), Some(&ServiceError::Unauthorized));

        assert!(flow.submit(Ticket(2)));
        assert_eq!(flow.error(), None);
        assert_eq!(flow.finish(Ticket(2), Ok(())), DeleteOutcome::Deleted);
    }

    #[test]
    fn failure_can_be_dismissed() {
        let mut flow = DeleteFlow::Failed {
            error: ServiceError::Network("timeout".into()),
        };
        assert!(flow.close());
        assert_eq!(flow, DeleteFlow::Closed);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut flow = DeleteFlow::Open;
        flow.submit(Ticket(2));
        assert_eq!(flow.finish(Ticket(1), Ok(())), DeleteOutcome::Stale);
        assert_eq!(flow, DeleteFlow::Submitting { ticket: Ticket(2) });

        let mut closed = DeleteFlow::Closed;
        assert_eq!(closed.finish(Ticket(2), Ok(())), DeleteOutcome::Stale);
        assert_eq!(closed, DeleteFlow::Closed);
    }
}
