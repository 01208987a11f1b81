use contracts::domain::a001_filter::SelectedFilters;
use leptos::prelude::*;

use super::gate::{FilterWorkflow, GateError, GateState};

/// Reactive handle to the filter workflow, provided once in `App`.
///
/// Every action runs inside a single `update`, so components never observe
/// a half-applied transition.
#[derive(Clone, Copy)]
pub struct FilterContext {
    workflow: RwSignal<FilterWorkflow>,
}

impl FilterContext {
    pub fn new() -> Self {
        Self {
            workflow: RwSignal::new(FilterWorkflow::new()),
        }
    }

    fn run<T>(
        &self,
        name: &str,
        action: impl FnOnce(&mut FilterWorkflow) -> Result<T, GateError>,
    ) -> Option<T> {
        let mut result = None;
        self.workflow.update(|wf| result = Some(action(wf)));
        match result? {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("filters: {} rejected: {}", name, e);
                None
            }
        }
    }

    pub fn open(&self) {
        self.run("open", FilterWorkflow::open);
    }

    pub fn toggle(&self, group_id: String, option_id: String) {
        self.run("toggle", |wf| wf.toggle(&group_id, &option_id));
    }

    pub fn clear_all(&self) {
        self.run("clear all", FilterWorkflow::clear_all);
    }

    pub fn request_apply(&self) {
        self.run("apply", FilterWorkflow::request_apply);
    }

    pub fn apply_new(&self) {
        self.run("apply new", FilterWorkflow::apply_new);
    }

    pub fn use_old(&self) {
        self.run("use old", FilterWorkflow::use_old);
    }

    /// Close whichever layer is open. Several close sources (Escape on two
    /// stacked modals) may fire for one gesture, so closed is not an error here.
    pub fn close(&self) {
        if self.workflow.with_untracked(|wf| wf.state() == GateState::Closed) {
            return;
        }
        self.run("close", FilterWorkflow::cancel);
    }

    pub fn is_modal_open(&self) -> bool {
        self.workflow.with(|wf| wf.is_modal_open())
    }

    pub fn is_confirm_open(&self) -> bool {
        self.workflow.with(|wf| wf.is_confirm_open())
    }

    pub fn is_checked(&self, group_id: &str, option_id: &str) -> bool {
        self.workflow
            .with(|wf| wf.temp_filters().is_checked(group_id, option_id))
    }

    pub fn selected_filters(&self) -> SelectedFilters {
        self.workflow.with(|wf| wf.selected_filters().deep_copy())
    }
}

impl Default for FilterContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_filters() -> FilterContext {
    use_context::<FilterContext>().expect("FilterContext not provided in context")
}
