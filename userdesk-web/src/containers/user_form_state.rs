//! State machine behind the user form.
//!
//! Loading: `Idle -> Loading -> Idle`. Submitting: `Idle -> Submitting -> Idle`,
//! with the error map replaced on rejection and cleared on success. A submit
//! requested outside `Idle` is dropped.

use super::user_drafts::{DraftKey, DraftList};
use shared::models::{UserField, UserRecord, ValidationErrors};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Submitting,
}

#[derive(Debug, Clone)]
pub enum UserFormAction {
    LoadStarted,
    Loaded(UserRecord),
    LoadFailed,
    AddRow,
    RemoveLastRow,
    EditField {
        key: DraftKey,
        field: UserField,
        value: String,
    },
    SubmitStarted,
    SubmitSucceeded,
    SubmitRejected(ValidationErrors),
    SubmitFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormState {
    pub phase: FormPhase,
    pub drafts: DraftList,
    pub errors: Option<ValidationErrors>,
}

impl UserFormState {
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// A new batch may only start from `Idle`.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    fn finish(&self, from: FormPhase) -> FormPhase {
        if self.phase == from {
            FormPhase::Idle
        } else {
            self.phase
        }
    }

    /// Next state after `action`.
    #[must_use]
    pub fn apply(&self, action: UserFormAction) -> Self {
        match action {
            UserFormAction::LoadStarted => Self {
                phase: FormPhase::Loading,
                ..self.clone()
            },
            UserFormAction::Loaded(record) => Self {
                phase: self.finish(FormPhase::Loading),
                drafts: self.drafts.replaced_with(record),
                errors: self.errors.clone(),
            },
            UserFormAction::LoadFailed => Self {
                phase: self.finish(FormPhase::Loading),
                ..self.clone()
            },
            UserFormAction::AddRow => Self {
                drafts: self.drafts.with_row_added(),
                ..self.clone()
            },
            UserFormAction::RemoveLastRow => Self {
                drafts: self.drafts.with_last_removed(),
                ..self.clone()
            },
            UserFormAction::EditField { key, field, value } => Self {
                drafts: self.drafts.with_field(key, field, &value),
                ..self.clone()
            },
            UserFormAction::SubmitStarted if self.can_submit() => Self {
                phase: FormPhase::Submitting,
                ..self.clone()
            },
            UserFormAction::SubmitStarted => self.clone(),
            UserFormAction::SubmitSucceeded => Self {
                phase: self.finish(FormPhase::Submitting),
                errors: None,
                ..self.clone()
            },
            UserFormAction::SubmitRejected(errors) => Self {
                phase: self.finish(FormPhase::Submitting),
                errors: Some(errors),
                ..self.clone()
            },
            UserFormAction::SubmitFailed => Self {
                phase: self.finish(FormPhase::Submitting),
                ..self.clone()
            },
        }
    }
}

impl Reducible for UserFormState {
    type Action = UserFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
