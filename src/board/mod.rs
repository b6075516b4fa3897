//! Board controller - owns the board state and runs network work
//!
//! Every network operation runs as its own task on the tokio runtime and reports
//! back through a channel. The GUI drains the channel once per frame with
//! [`Board::poll_events`], so all state changes happen on the GUI thread.

mod modal;
mod notice;
mod view;

pub use modal::{ConfirmModal, ModalAction, PendingDelete};
pub use notice::{Notice, NoticeKind, NoticeSlot};
pub use view::{ActivityCard, ActivityList, SelectOption};

use crate::api::{ApiError, BoardApi};
use crate::constants::*;
use crate::types::*;
use eframe::egui;
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Results reported by background tasks
#[derive(Debug)]
pub enum BoardEvent {
    ActivitiesLoaded(Vec<Activity>),
    ActivitiesFailed(ApiError),
    SignupFinished(Result<MutationOutcome, ApiError>),
    UnregisterFinished {
        key: ParticipantKey,
        result: Result<MutationOutcome, ApiError>,
        /// Released once the outcome has been applied
        guard: ControlGuard,
    },
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.activity.clear();
        self.email.clear();
    }
}

type DisabledControls = Arc<Mutex<HashSet<ParticipantKey>>>;

/// Keeps a removal control disabled for as long as it is alive
pub struct ControlGuard {
    key: ParticipantKey,
    disabled: DisabledControls,
    ctx: egui::Context,
}

impl ControlGuard {
    /// `None` if the control already has a request in flight
    fn acquire(key: ParticipantKey, disabled: &DisabledControls, ctx: &egui::Context) -> Option<Self> {
        let inserted = disabled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone());
        inserted.then(|| Self {
            key,
            disabled: disabled.clone(),
            ctx: ctx.clone(),
        })
    }
}

impl std::fmt::Debug for ControlGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlGuard").field("key", &self.key).finish()
    }
}

impl Drop for ControlGuard {
    fn drop(&mut self) {
        self.disabled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
        self.ctx.request_repaint();
    }
}

pub struct Board<A: BoardApi> {
    api: Arc<A>,
    runtime: tokio::runtime::Handle,
    ctx: egui::Context,
    events_tx: mpsc::UnboundedSender<BoardEvent>,
    events_rx: mpsc::UnboundedReceiver<BoardEvent>,
    list: ActivityList,
    options: Vec<SelectOption>,
    pub form: SignupForm,
    modal: ConfirmModal,
    focus_confirm: bool,
    notice: NoticeSlot,
    disabled: DisabledControls,
    refresh_interval: Option<Duration>,
    last_refresh: Option<Instant>,
}

impl<A: BoardApi> Board<A> {
    pub fn new(
        api: Arc<A>,
        runtime: tokio::runtime::Handle,
        ctx: egui::Context,
        refresh_interval: Option<Duration>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            api,
            runtime,
            ctx,
            events_tx,
            events_rx,
            list: ActivityList::Loading,
            options: vec![view::placeholder_option()],
            form: SignupForm::default(),
            modal: ConfirmModal::default(),
            focus_confirm: false,
            notice: NoticeSlot::new(Duration::from_secs(MESSAGE_DURATION_SECS)),
            disabled: Arc::new(Mutex::new(HashSet::new())),
            refresh_interval,
            last_refresh: None,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors for the view layer
    // ------------------------------------------------------------------------

    pub fn list(&self) -> &ActivityList {
        &self.list
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn modal(&self) -> &ConfirmModal {
        &self.modal
    }

    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.visible(now)
    }

    pub fn is_control_disabled(&self, key: &ParticipantKey) -> bool {
        self.disabled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    /// True once after the modal opens, so the view can focus the confirm button
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_confirm)
    }

    /// Earliest time the board needs another frame without user input
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let refresh_due = match (self.refresh_interval, self.last_refresh) {
            (Some(interval), Some(last)) => {
                Some(interval.saturating_sub(now.saturating_duration_since(last)))
            }
            _ => None,
        };
        match (self.notice.remaining(now), refresh_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = BoardEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let event = task.await;
            // Receiver only goes away when the board is dropped
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    /// Fetch the full activity mapping and rebuild the list and dropdown
    pub fn refresh_activities(&mut self) {
        self.last_refresh = Some(Instant::now());
        let api = self.api.clone();
        debug!("Refreshing activities");
        self.spawn(async move {
            match api.fetch_activities().await {
                Ok(activities) => BoardEvent::ActivitiesLoaded(activities),
                Err(e) => BoardEvent::ActivitiesFailed(e),
            }
        });
    }

    /// Refresh when the periodic interval has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.notice.expire(now);
        let Some(interval) = self.refresh_interval else {
            return;
        };
        let due = self
            .last_refresh
            .map_or(true, |last| now.saturating_duration_since(last) >= interval);
        if due {
            self.refresh_activities();
        }
    }

    /// Send the sign-up form as-is; the server validates it
    pub fn submit_signup(&mut self) {
        let activity = self.form.activity.clone();
        let email = self.form.email.clone();
        info!(activity = %activity, email = %email, "Submitting sign-up");
        let api = self.api.clone();
        self.spawn(async move { BoardEvent::SignupFinished(api.signup(&activity, &email).await) });
    }

    /// A participant's removal control was clicked
    pub fn request_delete(&mut self, key: ParticipantKey) {
        if key.activity.is_empty() || key.email.is_empty() {
            warn!(activity = %key.activity, email = %key.email, "Removal control without participant data");
            self.show_notice(MISSING_PARTICIPANT, NoticeKind::Error);
            return;
        }
        debug!(activity = %key.activity, email = %key.email, "Opening confirm modal");
        self.modal.open(PendingDelete::new(key));
        self.focus_confirm = true;
    }

    /// Close the confirm modal. Only `Confirm` issues the removal.
    pub fn resolve_modal(&mut self, action: ModalAction) {
        if self.modal.is_hidden() && action == ModalAction::Escape {
            return;
        }
        self.focus_confirm = false;
        match self.modal.resolve(action) {
            Some(pending) => self.perform_delete(pending),
            None => debug!(action = ?action, "Confirm modal dismissed"),
        }
    }

    fn perform_delete(&mut self, pending: PendingDelete) {
        let Some(guard) = ControlGuard::acquire(pending.control.clone(), &self.disabled, &self.ctx) else {
            debug!(activity = %pending.activity_name, email = %pending.email, "Removal already in flight");
            return;
        };
        info!(activity = %pending.activity_name, email = %pending.email, "Unregistering participant");
        let api = self.api.clone();
        self.spawn(async move {
            let result = api.unregister(&pending.activity_name, &pending.email).await;
            BoardEvent::UnregisterFinished {
                key: pending.control,
                result,
                guard,
            }
        });
    }

    fn show_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice.show(text, kind, Instant::now());
        self.ctx.request_repaint();
    }

    // ------------------------------------------------------------------------
    // Task results
    // ------------------------------------------------------------------------

    /// Apply every result that arrived since the last frame
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::ActivitiesLoaded(activities) => {
                debug!(count = activities.len(), "Activities loaded");
                self.list = ActivityList::Loaded(view::render_cards(&activities));
                self.options = view::render_options(&activities);
            }
            BoardEvent::ActivitiesFailed(e) => {
                error!(error = %e, "Failed to fetch activities");
                // Dropdown keeps whatever it showed before
                self.list = ActivityList::Failed;
            }
            BoardEvent::SignupFinished(result) => match result {
                Ok(MutationOutcome::Accepted { message }) => {
                    info!(message = %message, "Sign-up accepted");
                    self.show_notice(message, NoticeKind::Success);
                    self.form.reset();
                    self.refresh_activities();
                }
                Ok(MutationOutcome::Rejected { status, detail }) => {
                    warn!(status, detail = ?detail, "Sign-up rejected");
                    self.show_notice(detail_or(detail, SIGNUP_REJECTED_FALLBACK), NoticeKind::Error);
                }
                Err(e) => {
                    error!(error = %e, "Error signing up");
                    self.show_notice(SIGNUP_FAILED, NoticeKind::Error);
                }
            },
            // The guard drops at the end of this arm, together with the notice
            BoardEvent::UnregisterFinished { key, result, guard: _guard } => match result {
                Ok(MutationOutcome::Accepted { message }) => {
                    info!(activity = %key.activity, email = %key.email, "Participant unregistered");
                    self.show_notice(message, NoticeKind::Success);
                    self.refresh_activities();
                }
                Ok(MutationOutcome::Rejected { status, detail }) => {
                    warn!(status, detail = ?detail, activity = %key.activity, "Unregister rejected");
                    self.show_notice(
                        detail_or(detail, UNREGISTER_REJECTED_FALLBACK),
                        NoticeKind::Error,
                    );
                }
                Err(e) => {
                    error!(error = %e, activity = %key.activity, email = %key.email, "Error unregistering participant");
                    self.show_notice(UNREGISTER_FAILED, NoticeKind::Error);
                }
            },
        }
    }
}

fn detail_or(detail: Option<String>, fallback: &str) -> String {
    detail
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
