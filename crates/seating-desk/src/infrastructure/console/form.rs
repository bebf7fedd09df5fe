//! The seating form: a menu loop over the command bridge.
//!
//! ```text
//! run()
//!  ├─ show title + current seating
//!  └─ loop: prompt for an action
//!       ├─ assign  → prompt name, roll number, domain, seat → ui_bridge::assign_seat
//!       ├─ clear   → prompt seat                           → ui_bridge::clear_seat
//!       ├─ show    → ui_bridge::render_seating
//!       ├─ summary → ui_bridge::get_summary
//!       ├─ export  → ui_bridge::get_seating as JSON
//!       └─ quit / end of input → return
//! ```
//!
//! A failed action shows its message; a successful assign or clear shows the
//! refreshed seating.  A dismissed prompt stops asking for that action's
//! remaining fields and shows nothing.

use serde::Serialize;
use tracing::{debug, info};

use super::Dialog;
use crate::infrastructure::ui_bridge::{
    self, AppState, ClearFormDto, CommandResult, StudentFormDto,
};

/// Prompt shown when waiting for the next action.
pub const MENU_PROMPT: &str = "Choose an action [assign, clear, show, summary, export, quit]:";

/// One entry of the form's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Assign,
    Clear,
    Show,
    Summary,
    Export,
    Quit,
}

impl MenuAction {
    /// Parses an action name or its shortcut, ignoring case.
    ///
    /// `summary` is abbreviated `m` because `s` is taken by `show`; `exit` is
    /// accepted as a synonym for `quit`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "assign" | "a" => Some(Self::Assign),
            "clear" | "c" => Some(Self::Clear),
            "show" | "s" => Some(Self::Show),
            "summary" | "m" => Some(Self::Summary),
            "export" | "e" => Some(Self::Export),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The interactive form bound to one [`AppState`].
pub struct SeatingForm<'a, D> {
    state: &'a mut AppState,
    dialog: D,
}

impl<'a, D: Dialog> SeatingForm<'a, D> {
    pub fn new(state: &'a mut AppState, dialog: D) -> Self {
        Self { state, dialog }
    }

    /// Runs the menu loop until the operator quits or input ends.
    ///
    /// Returns the dialog so callers (and tests) can inspect it.
    pub fn run(mut self) -> D {
        let title = self.state.config.desk.title.clone();
        self.dialog.show_message(&title);
        self.show_seating();

        while let Some(choice) = self.dialog.prompt(MENU_PROMPT) {
            if choice.trim().is_empty() {
                continue;
            }
            let Some(action) = MenuAction::parse(&choice) else {
                self.dialog
                    .show_message(&format!("Unknown action '{}'.", choice.trim()));
                continue;
            };
            debug!(?action, "menu action selected");

            match action {
                MenuAction::Assign => self.assign(),
                MenuAction::Clear => self.clear(),
                MenuAction::Show => self.show_seating(),
                MenuAction::Summary => self.show_summary(),
                MenuAction::Export => self.export(),
                MenuAction::Quit => break,
            }
        }

        info!("seating form closed");
        self.dialog
    }

    fn assign(&mut self) {
        let form = self.collect_student_form();
        let result = ui_bridge::assign_seat(self.state, form);
        self.report(result);
    }

    fn clear(&mut self) {
        let form = ClearFormDto {
            seat_number: self.dialog.prompt("Enter seat number to clear:"),
        };
        let result = ui_bridge::clear_seat(self.state, form);
        self.report(result);
    }

    /// Asks for each field in turn, stopping at the first dismissed prompt.
    fn collect_student_form(&mut self) -> StudentFormDto {
        let mut form = StudentFormDto::default();
        form.name = self.dialog.prompt("Enter student name:");
        if form.name.is_none() {
            return form;
        }
        form.roll_number = self.dialog.prompt("Enter student roll number:");
        if form.roll_number.is_none() {
            return form;
        }
        form.domain = self.dialog.prompt("Enter student domain:");
        if form.domain.is_none() {
            return form;
        }
        form.seat_number = self.dialog.prompt("Enter seat number:");
        form
    }

    /// Shows the error of a failed command, or the refreshed seating on
    /// success.  Cancelled commands show nothing.
    fn report<T: Serialize>(&mut self, result: CommandResult<T>) {
        if result.success {
            self.show_seating();
        } else if let Some(error) = result.error {
            self.dialog.show_message(&error);
        }
    }

    fn show_seating(&mut self) {
        if let Some(text) = ui_bridge::render_seating(self.state).data {
            self.dialog.show_message(text.trim_end());
        }
    }

    fn show_summary(&mut self) {
        if let Some(summary) = ui_bridge::get_summary(self.state).data {
            self.dialog.show_message(&format!(
                "Occupied {} of {} seats (max {} per domain).",
                summary.occupied_seats, summary.total_seats, summary.domain_cap
            ));
        }
    }

    fn export(&mut self) {
        let seating = ui_bridge::get_seating(self.state);
        match serde_json::to_string_pretty(&seating.data) {
            Ok(json) => self.dialog.show_message(&json),
            Err(e) => self
                .dialog
                .show_message(&format!("Failed to export seating: {e}")),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
