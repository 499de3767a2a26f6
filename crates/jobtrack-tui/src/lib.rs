// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use jobtrack_app::{
    AppCommand, AppState, Application, ApplicationFormInput, ApplicationId, ApplicationStatus,
    FormMode, Stats, format_human_date, format_iso_date, parse_iso_date,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

/// Everything the event loop needs from the outside world. The real
/// implementation talks to the tracker server; tests substitute a fake.
pub trait AppRuntime {
    fn load_user(&mut self) -> Result<jobtrack_app::UserProfile>;
    fn load_applications(&mut self) -> Result<Vec<Application>>;
    fn load_stats(&mut self) -> Result<Stats>;
    fn create_application(&mut self, input: &ApplicationFormInput) -> Result<()>;
    fn update_application(&mut self, id: &ApplicationId, input: &ApplicationFormInput)
    -> Result<()>;
    fn delete_application(&mut self, id: &ApplicationId) -> Result<()>;
    fn logout(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Company,
    Position,
    Status,
    DateApplied,
    Location,
    Salary,
    JobUrl,
    Notes,
}

impl FormField {
    pub const ALL: [Self; 8] = [
        Self::Company,
        Self::Position,
        Self::Status,
        Self::DateApplied,
        Self::Location,
        Self::Salary,
        Self::JobUrl,
        Self::Notes,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Position => "position",
            Self::Status => "status",
            Self::DateApplied => "date applied",
            Self::Location => "location",
            Self::Salary => "salary",
            Self::JobUrl => "job link",
            Self::Notes => "notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    field_index: usize,
    // The date field is edited as text and only parsed on submit.
    date_buffer: String,
}

impl FormUiState {
    fn for_input(input: &ApplicationFormInput) -> Self {
        Self {
            field_index: 0,
            date_buffer: input.date_applied.map(format_iso_date).unwrap_or_default(),
        }
    }

    const fn field(&self) -> FormField {
        FormField::ALL[self.field_index]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingConfirm {
    Delete(ApplicationId),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    greeting: Option<String>,
    applications: Vec<Application>,
    stats: Option<Stats>,
    show_stats: bool,
    selected_row: usize,
    form: Option<FormUiState>,
    confirm: Option<PendingConfirm>,
    load_error: Option<String>,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R, show_stats: bool) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        show_stats,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    load_session(runtime, &mut view_data);
    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        view_data.load_error = Some(load_failure(&error));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // A blocking error swallows every key until acknowledged.
    if view_data.load_error.is_some() {
        view_data.load_error = None;
        return false;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.confirm.is_some() {
        return handle_confirm_key(state, runtime, view_data, internal_tx, key);
    }

    if state.form.is_open() {
        handle_form_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            move_cursor(view_data, 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            move_cursor(view_data, -1);
        }
        KeyCode::Char('g') => {
            view_data.selected_row = 0;
        }
        KeyCode::Char('G') => {
            view_data.selected_row = view_data.applications.len().saturating_sub(1);
        }
        KeyCode::Char('a') => {
            let today = OffsetDateTime::now_utc().date();
            state.dispatch(AppCommand::OpenAddForm(ApplicationFormInput::blank(today)));
            sync_form_ui_state(state, view_data);
        }
        KeyCode::Char('e') => {
            open_edit_form(state, runtime, view_data);
        }
        KeyCode::Char('d') => {
            if let Some(record) = view_data.applications.get(view_data.selected_row) {
                view_data.confirm = Some(PendingConfirm::Delete(record.id.clone()));
            }
        }
        KeyCode::Char('l') => {
            view_data.confirm = Some(PendingConfirm::Logout);
        }
        KeyCode::Char('r') => {
            if let Err(error) = refresh_view_data(runtime, view_data) {
                view_data.load_error = Some(load_failure(&error));
            } else {
                emit_status(state, view_data, internal_tx, "refreshed");
            }
        }
        KeyCode::Char('o') => {
            let message = match view_data.applications.get(view_data.selected_row) {
                Some(record) if !record.job_url.is_empty() => record.job_url.clone(),
                Some(_) => "no job link for this application".to_owned(),
                None => return false,
            };
            emit_status(state, view_data, internal_tx, message);
        }
        KeyCode::Char('s') => {
            view_data.show_stats = !view_data.show_stats;
        }
        KeyCode::Char('?') => {
            view_data.help_visible = true;
        }
        _ => {}
    }
    false
}

fn move_cursor(view_data: &mut ViewData, delta: isize) {
    if view_data.applications.is_empty() {
        view_data.selected_row = 0;
        return;
    }
    let last = view_data.applications.len() - 1;
    let next = view_data.selected_row.saturating_add_signed(delta);
    view_data.selected_row = next.min(last);
}

/// Re-fetches the collection and opens the edit form for the selected record.
/// A record that vanished between fetches is a quiet no-op; only a failed
/// fetch is surfaced.
fn open_edit_form<R: AppRuntime>(state: &mut AppState, runtime: &mut R, view_data: &mut ViewData) {
    let Some(target_id) = view_data
        .applications
        .get(view_data.selected_row)
        .map(|record| record.id.clone())
    else {
        return;
    };

    let fresh = match runtime.load_applications() {
        Ok(records) => records,
        Err(error) => {
            view_data.load_error = Some(load_failure(&error));
            return;
        }
    };
    view_data.applications = fresh;
    clamp_cursor(view_data);

    let Some(record) = view_data
        .applications
        .iter()
        .find(|record| record.id == target_id)
    else {
        return;
    };

    let snapshot = ApplicationFormInput::from_record(record);
    state.dispatch(AppCommand::OpenEditForm(target_id, snapshot));
    sync_form_ui_state(state, view_data);
}

fn handle_confirm_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let Some(confirm) = view_data.confirm.take() else {
        return false;
    };
    if !matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        return false;
    }

    match confirm {
        PendingConfirm::Delete(id) => {
            if let Err(error) = runtime.delete_application(&id) {
                view_data.load_error = Some(format!("delete failed: {error:#}"));
                return false;
            }
            refresh_after_change(state, runtime, view_data, internal_tx, "application deleted");
            false
        }
        PendingConfirm::Logout => match runtime.logout() {
            Ok(()) => true,
            Err(error) => {
                view_data.load_error = Some(format!("logout failed: {error:#}"));
                false
            }
        },
    }
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(form) = view_data.form.as_mut() else {
        sync_form_ui_state(state, view_data);
        return;
    };

    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CancelForm);
            view_data.form = None;
        }
        KeyCode::Enter => {
            submit_form(state, runtime, view_data, internal_tx);
        }
        KeyCode::Tab | KeyCode::Down => {
            form.field_index = (form.field_index + 1) % FormField::ALL.len();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.field_index =
                (form.field_index + FormField::ALL.len() - 1) % FormField::ALL.len();
        }
        KeyCode::Char(c) => {
            let field = form.field();
            match field {
                FormField::Status => {
                    if let Some(index) = c.to_digit(10)
                        && (1..=ApplicationStatus::ALL.len() as u32).contains(&index)
                        && let Some(input) = state.form_input_mut()
                    {
                        input.status = ApplicationStatus::ALL[index as usize - 1];
                    }
                }
                FormField::DateApplied => {
                    form.date_buffer.push(c);
                }
                _ => {
                    if let Some(buffer) = form_text_field_mut(state, field) {
                        buffer.push(c);
                    }
                }
            }
        }
        KeyCode::Backspace => {
            let field = form.field();
            match field {
                FormField::Status => {}
                FormField::DateApplied => {
                    form.date_buffer.pop();
                }
                _ => {
                    if let Some(buffer) = form_text_field_mut(state, field) {
                        buffer.pop();
                    }
                }
            }
        }
        _ => {}
    }
}

fn form_text_field_mut(state: &mut AppState, field: FormField) -> Option<&mut String> {
    let input = state.form_input_mut()?;
    match field {
        FormField::Company => Some(&mut input.company),
        FormField::Position => Some(&mut input.position),
        FormField::Location => Some(&mut input.location),
        FormField::Salary => Some(&mut input.salary),
        FormField::JobUrl => Some(&mut input.job_url),
        FormField::Notes => Some(&mut input.notes),
        FormField::Status | FormField::DateApplied => None,
    }
}

fn submit_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(form) = view_data.form.as_ref() else {
        return;
    };

    let buffer = form.date_buffer.trim();
    let date_applied = if buffer.is_empty() {
        None
    } else {
        match parse_iso_date(buffer) {
            Some(date) => Some(date),
            None => {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    "date applied must look like 2024-01-31",
                );
                return;
            }
        }
    };

    let Some(input) = state.form_input_mut() else {
        return;
    };
    input.date_applied = date_applied;
    let input = input.clone();

    let outcome = match state.edit_target().cloned() {
        Some(id) => runtime.update_application(&id, &input),
        None => runtime.create_application(&input),
    };
    if let Err(error) = outcome {
        view_data.load_error = Some(format!("save failed: {error:#}"));
        return;
    }

    let events = state.dispatch(AppCommand::SubmitForm);
    view_data.form = None;
    let message = match events.first() {
        Some(jobtrack_app::AppEvent::FormSubmitted(FormMode::Edit)) => "application updated",
        _ => "application added",
    };
    refresh_after_change(state, runtime, view_data, internal_tx, message);
}

fn refresh_after_change<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: &str,
) {
    if let Err(error) = refresh_view_data(runtime, view_data) {
        view_data.load_error = Some(load_failure(&error));
        return;
    }
    emit_status(state, view_data, internal_tx, message);
}

/// Runs once at startup. A missing profile degrades to the generic
/// greeting; refreshes never touch the profile again.
fn load_session<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) {
    if let Ok(user) = runtime.load_user() {
        view_data.greeting = Some(user.name);
    }
}

/// Pulls the collection and stats. Only the collection fetch is
/// load-bearing; a missing stats payload degrades quietly.
fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.applications = runtime.load_applications()?;
    clamp_cursor(view_data);
    // Stale counters beat missing ones; a failed stats fetch keeps the
    // previous snapshot.
    if let Ok(stats) = runtime.load_stats() {
        view_data.stats = Some(stats);
    }
    Ok(())
}

fn load_failure(error: &anyhow::Error) -> String {
    format!("failed to load applications: {error:#}; press r to retry")
}

fn clamp_cursor(view_data: &mut ViewData) {
    view_data.selected_row = view_data
        .selected_row
        .min(view_data.applications.len().saturating_sub(1));
}

fn sync_form_ui_state(state: &AppState, view_data: &mut ViewData) {
    match state.form_input() {
        Some(input) if view_data.form.is_none() => {
            view_data.form = Some(FormUiState::for_input(input));
        }
        Some(_) => {}
        None => view_data.form = None,
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(view_data))
        .block(Block::default().title("jobtrack").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    if view_data.show_stats && view_data.stats.is_some() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(26)])
            .split(layout[1]);
        render_table(frame, body[0], view_data);
        render_stats_panel(frame, body[1], view_data);
    } else {
        render_table(frame, layout[1], view_data);
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let Some(form) = &view_data.form {
        let area = centered_rect(64, 72, frame.area());
        frame.render_widget(Clear, area);
        let title = match state.edit_target() {
            Some(_) => "edit application",
            None => "add application",
        };
        let overlay = Paragraph::new(render_form_overlay_text(state, form))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(overlay, area);
    }

    if let Some(confirm) = &view_data.confirm {
        let area = centered_rect(50, 22, frame.area());
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(confirm_overlay_text(confirm, view_data)).block(
            Block::default()
                .title("confirm")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(overlay, area);
    }

    if let Some(message) = &view_data.load_error {
        let area = centered_rect(60, 28, frame.area());
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(format!("{message}\n\npress any key to continue")).block(
            Block::default()
                .title("error")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(overlay, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 64, frame.area());
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(overlay, area);
    }
}

fn header_text(view_data: &ViewData) -> String {
    match &view_data.greeting {
        Some(name) => format!("Welcome, {}!", sanitize_cell(name)),
        None => "Welcome, User!".to_owned(),
    }
}

fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    if view_data.applications.is_empty() {
        let empty = Paragraph::new(empty_table_text())
            .block(Block::default().title("applications").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["company", "position", "status", "applied", "location", "salary"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view_data
        .applications
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut row = Row::new(vec![
                Cell::from(sanitize_cell(&record.company)),
                Cell::from(sanitize_cell(&record.position)),
                Cell::from(record.status.badge())
                    .style(Style::default().fg(status_color(record.status))),
                Cell::from(format_human_date(record.date_applied)),
                Cell::from(optional_cell(&record.location)),
                Cell::from(optional_cell(&record.salary)),
            ]);
            if index == view_data.selected_row {
                row = row.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            row
        })
        .collect::<Vec<_>>();

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(26),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Percentage(18),
        Constraint::Percentage(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("applications").borders(Borders::ALL));
    frame.render_widget(table, area);
}

const fn status_color(status: ApplicationStatus) -> Color {
    match status {
        ApplicationStatus::Applied => Color::Cyan,
        ApplicationStatus::Interview => Color::Yellow,
        ApplicationStatus::Offer => Color::Green,
        ApplicationStatus::Rejected => Color::Red,
        ApplicationStatus::Withdrawn => Color::DarkGray,
    }
}

fn render_stats_panel(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let Some(stats) = &view_data.stats else {
        return;
    };
    let panel = Paragraph::new(stats_panel_text(stats))
        .block(Block::default().title("stats").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn empty_table_text() -> &'static str {
    "no applications yet. press a to add one."
}

fn stats_panel_text(stats: &Stats) -> String {
    let mut lines = vec![format!("total: {}", stats.total)];
    for status in ApplicationStatus::ALL {
        lines.push(format!("{}: {}", status.badge(), stats.count_for(status)));
    }
    lines.join("\n")
}

fn render_form_overlay_text(state: &AppState, form: &FormUiState) -> String {
    let Some(input) = state.form_input() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(FormField::ALL.len() + 2);
    for (index, field) in FormField::ALL.iter().enumerate() {
        let marker = if index == form.field_index { "> " } else { "  " };
        let value = match field {
            FormField::Company => sanitize_cell(&input.company),
            FormField::Position => sanitize_cell(&input.position),
            FormField::Status => format!("{} (1-5 to change)", input.status.badge()),
            FormField::DateApplied => form.date_buffer.clone(),
            FormField::Location => sanitize_cell(&input.location),
            FormField::Salary => sanitize_cell(&input.salary),
            FormField::JobUrl => sanitize_cell(&input.job_url),
            FormField::Notes => sanitize_cell(&input.notes),
        };
        lines.push(format!("{marker}{}: {value}", field.label()));
    }
    lines.push(String::new());
    lines.push("tab next field | enter save | esc cancel".to_owned());
    lines.join("\n")
}

fn confirm_overlay_text(confirm: &PendingConfirm, view_data: &ViewData) -> String {
    match confirm {
        PendingConfirm::Delete(id) => {
            let name = view_data
                .applications
                .iter()
                .find(|record| record.id == *id)
                .map(|record| format!("{} at {}", record.position, record.company))
                .unwrap_or_else(|| "this application".to_owned());
            format!("delete {}?\n\ny to confirm, any other key to cancel", sanitize_cell(&name))
        }
        PendingConfirm::Logout => {
            "log out?\n\ny to confirm, any other key to cancel".to_owned()
        }
    }
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible || view_data.load_error.is_some() {
        return String::new();
    }

    let hints = if state.form.is_open() {
        let field = view_data
            .form
            .as_ref()
            .map(|form| form.field().label())
            .unwrap_or("company");
        format!("field: {field} | tab/shift-tab move | enter save | esc cancel")
    } else {
        "j/k move | a add | e edit | d delete | o link | r refresh | s stats | l logout | ? help | q quit"
            .to_owned()
    };
    match &state.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints,
    }
}

fn help_overlay_text() -> &'static str {
    "browse\n\
     \x20 j/k or arrows   move selection\n\
     \x20 g/G             first/last row\n\
     \x20 a               add an application\n\
     \x20 e               edit the selected application\n\
     \x20 d               delete the selected application\n\
     \x20 o               show the job link\n\
     \x20 r               refresh from the server\n\
     \x20 s               toggle the stats panel\n\
     \x20 l               log out and quit\n\
     \x20 q / ctrl+q      quit\n\
     \n\
     form\n\
     \x20 tab/shift-tab   next/previous field\n\
     \x20 1-5             pick a status\n\
     \x20 enter           save\n\
     \x20 esc             cancel\n\
     \n\
     esc or ? closes this help"
}

/// Absent optional fields render as a placeholder rather than an empty cell.
fn optional_cell(value: &str) -> String {
    if value.is_empty() {
        "-".to_owned()
    } else {
        sanitize_cell(value)
    }
}

/// Terminal cells have no markup to escape, but control characters would
/// corrupt the layout the same way unescaped HTML corrupts a page.
fn sanitize_cell(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
