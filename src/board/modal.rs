//! Confirmation modal gating participant removal

use crate::types::ParticipantKey;

/// A removal waiting for the user to confirm
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub activity_name: String,
    pub email: String,
    /// The removal control that asked for it
    pub control: ParticipantKey,
}

impl PendingDelete {
    pub fn new(control: ParticipantKey) -> Self {
        Self {
            activity_name: control.activity.clone(),
            email: control.email.clone(),
            control,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Confirm,
    Cancel,
    Backdrop,
    Escape,
}

#[derive(Debug, Default, PartialEq)]
pub enum ConfirmModal {
    #[default]
    Closed,
    Open(PendingDelete),
}

impl ConfirmModal {
    /// Opens the modal. Any earlier pending removal is discarded.
    pub fn open(&mut self, pending: PendingDelete) {
        *self = ConfirmModal::Open(pending);
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmModal::Open(_))
    }

    /// Accessibility hidden state
    pub fn is_hidden(&self) -> bool {
        !self.is_open()
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        match self {
            ConfirmModal::Open(pending) => Some(pending),
            ConfirmModal::Closed => None,
        }
    }

    /// Closes the modal and hands back the pending removal only when confirmed.
    pub fn resolve(&mut self, action: ModalAction) -> Option<PendingDelete> {
        match std::mem::take(self) {
            ConfirmModal::Open(pending) if action == ModalAction::Confirm => Some(pending),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(email: &str) -> PendingDelete {
        PendingDelete::new(ParticipantKey::new("Chess Club", email))
    }

    #[test]
    fn test_open_records_pending() {
        let mut modal = ConfirmModal::default();
        assert!(modal.is_hidden());
        modal.open(pending("a@b.com"));
        assert!(modal.is_open());
        assert!(!modal.is_hidden());
        let p = modal.pending().unwrap();
        assert_eq!(p.activity_name, "Chess Club");
        assert_eq!(p.email, "a@b.com");
    }

    #[test]
    fn test_new_request_overwrites_pending() {
        let mut modal = ConfirmModal::default();
        modal.open(pending("a@b.com"));
        modal.open(pending("c@d.com"));
        assert_eq!(modal.pending().unwrap().email, "c@d.com");
    }

    #[test]
    fn test_confirm_returns_pending_and_closes() {
        let mut modal = ConfirmModal::default();
        modal.open(pending("a@b.com"));
        assert_eq!(modal.resolve(ModalAction::Confirm), Some(pending("a@b.com")));
        assert_eq!(modal, ConfirmModal::Closed);
    }

    #[test]
    fn test_dismiss_paths_are_equivalent() {
        for action in [ModalAction::Cancel, ModalAction::Backdrop, ModalAction::Escape] {
            let mut modal = ConfirmModal::default();
            modal.open(pending("a@b.com"));
            assert_eq!(modal.resolve(action), None, "{action:?}");
            assert_eq!(modal, ConfirmModal::Closed, "{action:?}");
        }
    }

    #[test]
    fn test_resolve_on_closed_is_noop() {
        let mut modal = ConfirmModal::default();
        assert_eq!(modal.resolve(ModalAction::Confirm), None);
        assert_eq!(modal.resolve(ModalAction::Escape), None);
        assert_eq!(modal, ConfirmModal::Closed);
    }
}
