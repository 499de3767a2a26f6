// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::forms::ApplicationFormInput;
use crate::ids::ApplicationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// The single modal editing session. There is at most one open session, and
/// every transition between sessions passes through `Closed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormSession {
    #[default]
    Closed,
    Creating(ApplicationFormInput),
    Editing(ApplicationId, ApplicationFormInput),
}

impl FormSession {
    pub const fn mode(&self) -> Option<FormMode> {
        match self {
            Self::Closed => None,
            Self::Creating(_) => Some(FormMode::Create),
            Self::Editing(_, _) => Some(FormMode::Edit),
        }
    }

    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub form: FormSession,
    pub status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    OpenAddForm(ApplicationFormInput),
    OpenEditForm(ApplicationId, ApplicationFormInput),
    CancelForm,
    /// Dispatched only after the create/update request succeeded.
    SubmitForm,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    FormOpened(FormMode),
    FormClosed,
    /// The mutation behind an open session committed; the view must be
    /// re-derived from a fresh fetch.
    FormSubmitted(FormMode),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::OpenAddForm(input) => {
                if self.form.is_open() {
                    return Vec::new();
                }
                self.form = FormSession::Creating(input);
                vec![AppEvent::FormOpened(FormMode::Create)]
            }
            AppCommand::OpenEditForm(id, snapshot) => {
                if self.form.is_open() {
                    return Vec::new();
                }
                self.form = FormSession::Editing(id, snapshot);
                vec![AppEvent::FormOpened(FormMode::Edit)]
            }
            AppCommand::CancelForm => match std::mem::take(&mut self.form) {
                FormSession::Closed => Vec::new(),
                _ => vec![AppEvent::FormClosed],
            },
            AppCommand::SubmitForm => {
                let mode = self.form.mode();
                self.form = FormSession::Closed;
                match mode {
                    Some(mode) => vec![AppEvent::FormSubmitted(mode), AppEvent::FormClosed],
                    None => Vec::new(),
                }
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    /// Field values of the open session, if any.
    pub fn form_input(&self) -> Option<&ApplicationFormInput> {
        match &self.form {
            FormSession::Closed => None,
            FormSession::Creating(input) | FormSession::Editing(_, input) => Some(input),
        }
    }

    pub fn form_input_mut(&mut self) -> Option<&mut ApplicationFormInput> {
        match &mut self.form {
            FormSession::Closed => None,
            FormSession::Creating(input) | FormSession::Editing(_, input) => Some(input),
        }
    }

    /// Identifier the open session will update on submit; `None` means a
    /// submit creates a new record.
    pub fn edit_target(&self) -> Option<&ApplicationId> {
        match &self.form {
            FormSession::Editing(id, _) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState, FormMode, FormSession};
    use crate::forms::ApplicationFormInput;
    use crate::ids::ApplicationId;
    use time::{Date, Month};

    fn today() -> Date {
        Date::from_calendar_date(2024, Month::January, 5).expect("valid date")
    }

    #[test]
    fn add_opens_a_create_session() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::OpenAddForm(ApplicationFormInput::blank(today())));
        assert_eq!(events, vec![AppEvent::FormOpened(FormMode::Create)]);
        assert_eq!(state.form.mode(), Some(FormMode::Create));
        assert!(state.edit_target().is_none());
    }

    #[test]
    fn edit_opens_with_target_id_and_snapshot() {
        let mut state = AppState::default();
        let snapshot = ApplicationFormInput::blank(today());
        let events = state.dispatch(AppCommand::OpenEditForm(
            ApplicationId::new("r7"),
            snapshot.clone(),
        ));
        assert_eq!(events, vec![AppEvent::FormOpened(FormMode::Edit)]);
        assert_eq!(state.edit_target().map(ApplicationId::as_str), Some("r7"));
        assert_eq!(state.form_input(), Some(&snapshot));
    }

    #[test]
    fn second_open_is_ignored_while_a_session_is_live() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenAddForm(ApplicationFormInput::blank(today())));

        let events = state.dispatch(AppCommand::OpenEditForm(
            ApplicationId::new("r1"),
            ApplicationFormInput::blank(today()),
        ));
        assert!(events.is_empty());
        assert_eq!(state.form.mode(), Some(FormMode::Create));
    }

    #[test]
    fn cancel_returns_to_closed_and_drops_fields() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenAddForm(ApplicationFormInput::blank(today())));

        let events = state.dispatch(AppCommand::CancelForm);
        assert_eq!(events, vec![AppEvent::FormClosed]);
        assert_eq!(state.form, FormSession::Closed);
        assert!(state.form_input().is_none());
    }

    #[test]
    fn cancel_without_a_session_is_a_no_op() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::CancelForm).is_empty());
    }

    #[test]
    fn submit_closes_the_session_and_reports_its_mode() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenEditForm(
            ApplicationId::new("r2"),
            ApplicationFormInput::blank(today()),
        ));

        let events = state.dispatch(AppCommand::SubmitForm);
        assert_eq!(
            events,
            vec![
                AppEvent::FormSubmitted(FormMode::Edit),
                AppEvent::FormClosed,
            ],
        );
        assert_eq!(state.form, FormSession::Closed);
    }

    #[test]
    fn status_line_set_and_clear() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SetStatus("saved".to_owned()));
        assert_eq!(events, vec![AppEvent::StatusUpdated("saved".to_owned())]);
        assert_eq!(state.status_line.as_deref(), Some("saved"));

        let events = state.dispatch(AppCommand::ClearStatus);
        assert_eq!(events, vec![AppEvent::StatusCleared]);
        assert!(state.status_line.is_none());
    }
}
