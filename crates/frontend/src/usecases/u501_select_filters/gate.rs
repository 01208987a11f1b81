//! Two-step apply: the modal stages an apply, then the user picks
//! "use old" or "apply new" on the confirmation layer.
//!
//! ```text
//! Closed --open--> Editing --request_apply--> ConfirmingApply
//!    ^                |                            |
//!    +-----cancel-----+----apply_new / use_old-----+
//!    +----------------------cancel-----------------+
//! ```

use std::fmt;

use contracts::domain::a001_filter::SelectedFilters;

use super::session::FilterEditSession;
use super::store::{AppliedFilterStore, CommitOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Closed,
    Editing,
    ConfirmingApply,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateState::Closed => "closed",
            GateState::Editing => "editing",
            GateState::ConfirmingApply => "confirming apply",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Open,
    Toggle,
    ClearAll,
    RequestApply,
    ApplyNew,
    UseOld,
    Cancel,
}

impl fmt::Display for GateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateAction::Open => "open",
            GateAction::Toggle => "toggle",
            GateAction::ClearAll => "clear all",
            GateAction::RequestApply => "request apply",
            GateAction::ApplyNew => "apply new",
            GateAction::UseOld => "use old",
            GateAction::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: GateState, action: GateAction },
}

/// Store, edit session and confirmation state in one place.
/// All mutations of filter state go through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterWorkflow {
    store: AppliedFilterStore,
    session: FilterEditSession,
    state: GateState,
}

impl FilterWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn selected_filters(&self) -> &SelectedFilters {
        self.store.selected_filters()
    }

    pub fn last_applied_filters(&self) -> &SelectedFilters {
        self.store.last_applied_filters()
    }

    pub fn temp_filters(&self) -> &SelectedFilters {
        self.session.temp_filters()
    }

    pub fn is_modal_open(&self) -> bool {
        self.state != GateState::Closed
    }

    pub fn is_confirm_open(&self) -> bool {
        self.state == GateState::ConfirmingApply
    }

    fn require_state(&self, expected: GateState, action: GateAction) -> Result<(), GateError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GateError::InvalidTransition {
                from: self.state,
                action,
            })
        }
    }

    pub fn open(&mut self) -> Result<(), GateError> {
        self.require_state(GateState::Closed, GateAction::Open)?;
        self.session.open(self.store.last_applied_filters());
        self.state = GateState::Editing;
        log::debug!(
            "filters opened with {} group(s)",
            self.session.temp_filters().len()
        );
        Ok(())
    }

    pub fn toggle(&mut self, group_id: &str, option_id: &str) -> Result<(), GateError> {
        self.require_state(GateState::Editing, GateAction::Toggle)?;
        self.session.toggle(group_id, option_id);
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<(), GateError> {
        self.require_state(GateState::Editing, GateAction::ClearAll)?;
        self.session.clear_all(&mut self.store);
        log::debug!("all filters cleared");
        Ok(())
    }

    pub fn request_apply(&mut self) -> Result<(), GateError> {
        self.require_state(GateState::Editing, GateAction::RequestApply)?;
        self.state = GateState::ConfirmingApply;
        Ok(())
    }

    pub fn apply_new(&mut self) -> Result<CommitOutcome, GateError> {
        self.require_state(GateState::ConfirmingApply, GateAction::ApplyNew)?;
        let candidate = self.session.take();
        let outcome = self.store.commit(candidate, true);
        self.state = GateState::Closed;
        log::debug!("apply new: {:?}", outcome);
        Ok(outcome)
    }

    pub fn use_old(&mut self) -> Result<CommitOutcome, GateError> {
        self.require_state(GateState::ConfirmingApply, GateAction::UseOld)?;
        let previous = self.store.last_applied_filters().deep_copy();
        let outcome = self.store.commit(previous, false);
        self.session.close();
        self.state = GateState::Closed;
        log::debug!("use old: {:?}", outcome);
        Ok(outcome)
    }

    /// Close button, Escape or overlay click on either layer.
    /// Dismissing the confirmation layer does not commit anything.
    pub fn cancel(&mut self) -> Result<(), GateError> {
        if self.state == GateState::Closed {
            return Err(GateError::InvalidTransition {
                from: self.state,
                action: GateAction::Cancel,
            });
        }
        self.session.close();
        self.state = GateState::Closed;
        Ok(())
    }
}
