//! Command bridge: exposes application-layer operations to a presentation layer.
//!
//! Every user action of the seating form maps to one function here.  The
//! terminal form in [`crate::infrastructure::console`] is the in-tree
//! consumer; a graphical frontend would call the same functions and receive
//! the same JSON-serialisable results.
//!
//! # Data Transfer Objects (DTOs)
//!
//! The domain types (`Seat`, `Student`) keep their fields private and carry
//! invariants.  DTOs are plain serde structs:
//!
//! - form DTOs ([`StudentFormDto`], [`ClearFormDto`]) carry the raw text the
//!   operator typed, with `None` for a dismissed prompt;
//! - view DTOs ([`SeatDto`], [`SeatingSummaryDto`]) are read-only snapshots.
//!
//! # `CommandResult<T>` wrapper
//!
//! All commands return `CommandResult<T>` so every response has the same
//! shape: `{ success: bool, data: T | null, error: string | null }`.  A
//! cancelled prompt yields `success == false` with `error == null`; callers
//! should show nothing in that case.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::manage_seating::SeatingDesk;
use crate::application::validate_input::{RawAssignInput, RawClearInput};
use crate::infrastructure::storage::config::AppConfig;
use seating_core::{RollNumber, Seat, SeatNumber, SeatingError, Student};

// ── Application state ─────────────────────────────────────────────────────────

/// Everything the commands operate on.
///
/// Built once in `main` and passed by `&mut` to the form.  Commands need
/// exclusive access for mutations, which serialises them without a lock.
#[derive(Debug)]
pub struct AppState {
    /// The seating use case and its arrangement.
    pub desk: SeatingDesk,
    /// The effective configuration the desk was built from.
    pub config: AppConfig,
}

impl AppState {
    /// Builds the desk described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`SeatingError`] if the configured seat count or cap is zero.
    pub fn new(config: AppConfig) -> Result<Self, SeatingError> {
        let desk = SeatingDesk::new(
            config.arrangement.total_seats,
            config.arrangement.domain_cap,
        )?;
        Ok(Self { desk, config })
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// Raw fields of the assign form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentFormDto {
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub domain: Option<String>,
    pub seat_number: Option<String>,
}

impl From<StudentFormDto> for RawAssignInput {
    fn from(dto: StudentFormDto) -> Self {
        Self {
            name: dto.name,
            roll_number: dto.roll_number,
            domain: dto.domain,
            seat_number: dto.seat_number,
        }
    }
}

/// Raw field of the clear form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearFormDto {
    pub seat_number: Option<String>,
}

impl From<ClearFormDto> for RawClearInput {
    fn from(dto: ClearFormDto) -> Self {
        Self {
            seat_number: dto.seat_number,
        }
    }
}

/// Snapshot of one occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDto {
    pub name: String,
    pub roll_number: RollNumber,
    pub domain: String,
}

impl From<&Student> for StudentDto {
    fn from(s: &Student) -> Self {
        Self {
            name: s.name().to_string(),
            roll_number: s.roll_number(),
            domain: s.domain().to_string(),
        }
    }
}

/// Snapshot of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatDto {
    pub seat_number: SeatNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentDto>,
}

impl From<&Seat> for SeatDto {
    fn from(seat: &Seat) -> Self {
        Self {
            seat_number: seat.number(),
            student: seat.occupant().map(StudentDto::from),
        }
    }
}

/// Occupancy counters for the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingSummaryDto {
    pub total_seats: usize,
    pub occupied_seats: usize,
    pub domain_cap: u32,
}

/// Unified response wrapper used by all commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
    /// A failed command with nothing to report to the operator.
    pub fn cancelled() -> Self {
        Self {
            success: false,
            data: None,
            error: None,
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Validates the assign form and seats the student.
///
/// On success `data` is the updated seat.
pub fn assign_seat(state: &mut AppState, form: StudentFormDto) -> CommandResult<SeatDto> {
    match state.desk.submit_assignment(form.into()) {
        Ok(seat_number) => seat_snapshot(state, seat_number),
        Err(e) if e.is_cancellation() => {
            debug!("assign cancelled by operator");
            CommandResult::cancelled()
        }
        Err(e) => CommandResult::err(e.user_message()),
    }
}

/// Validates the clear form and empties the seat.
///
/// On success `data` is the (now empty) seat.
pub fn clear_seat(state: &mut AppState, form: ClearFormDto) -> CommandResult<SeatDto> {
    match state.desk.submit_clear(form.into()) {
        Ok(seat_number) => seat_snapshot(state, seat_number),
        Err(e) if e.is_cancellation() => {
            debug!("clear cancelled by operator");
            CommandResult::cancelled()
        }
        Err(e) => CommandResult::err(e.user_message()),
    }
}

/// Returns every seat in ascending order.
pub fn get_seating(state: &AppState) -> CommandResult<Vec<SeatDto>> {
    let seats = state
        .desk
        .arrangement()
        .seats()
        .iter()
        .map(SeatDto::from)
        .collect();
    CommandResult::ok(seats)
}

/// Returns the line-per-seat text rendering.
pub fn render_seating(state: &AppState) -> CommandResult<String> {
    CommandResult::ok(state.desk.render())
}

/// Returns occupancy counters.
pub fn get_summary(state: &AppState) -> CommandResult<SeatingSummaryDto> {
    let arrangement = state.desk.arrangement();
    CommandResult::ok(SeatingSummaryDto {
        total_seats: arrangement.total_seats(),
        occupied_seats: arrangement.occupied_count(),
        domain_cap: arrangement.domain_cap(),
    })
}

fn seat_snapshot(state: &AppState, seat_number: SeatNumber) -> CommandResult<SeatDto> {
    match state.desk.arrangement().seat(seat_number) {
        Some(seat) => CommandResult::ok(SeatDto::from(seat)),
        None => CommandResult::err(SeatingError::SeatNotFound(seat_number).to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state(total_seats: SeatNumber, domain_cap: u32) -> AppState {
        let mut config = AppConfig::default();
        config.arrangement.total_seats = total_seats;
        config.arrangement.domain_cap = domain_cap;
        AppState::new(config).expect("valid config")
    }

    fn form(name: &str, roll: &str, domain: &str, seat: &str) -> StudentFormDto {
        StudentFormDto {
            name: Some(name.to_string()),
            roll_number: Some(roll.to_string()),
            domain: Some(domain.to_string()),
            seat_number: Some(seat.to_string()),
        }
    }

    #[test]
    fn test_app_state_rejects_zero_seat_config() {
        let mut config = AppConfig::default();
        config.arrangement.total_seats = 0;
        assert_eq!(AppState::new(config).unwrap_err(), SeatingError::NoSeats);
    }

    #[test]
    fn test_get_seating_returns_all_seats_empty_initially() {
        // Arrange
        let state = make_state(4, 2);

        // Act
        let result = get_seating(&state);

        // Assert
        assert!(result.success);
        let seats = result.data.unwrap();
        assert_eq!(seats.len(), 4);
        assert!(seats.iter().all(|s| s.student.is_none()));
        assert_eq!(seats[0].seat_number, 1);
    }

    #[test]
    fn test_assign_seat_returns_updated_seat() {
        // Arrange
        let mut state = make_state(4, 2);

        // Act
        let result = assign_seat(&mut state, form("Asha", "1021", "CS", "3"));

        // Assert
        assert!(result.success, "unexpected error: {:?}", result.error);
        assert_eq!(
            result.data.unwrap(),
            SeatDto {
                seat_number: 3,
                student: Some(StudentDto {
                    name: "Asha".to_string(),
                    roll_number: 1021,
                    domain: "CS".to_string(),
                }),
            }
        );
    }

    #[test]
    fn test_assign_seat_reports_occupied_seat() {
        let mut state = make_state(4, 2);
        assign_seat(&mut state, form("Asha", "1", "CS", "1"));

        let result = assign_seat(&mut state, form("Ben", "2", "EE", "1"));

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Seat is already assigned to a student."));
    }

    #[test]
    fn test_cancelled_assign_has_no_error_text() {
        let mut state = make_state(4, 2);
        let mut cancelled = form("Asha", "1", "CS", "1");
        cancelled.seat_number = None;

        let result = assign_seat(&mut state, cancelled);

        assert!(!result.success);
        assert!(result.error.is_none());
        assert_eq!(state.desk.arrangement().occupied_count(), 0);
    }

    #[test]
    fn test_clear_seat_reports_invalid_seat_number() {
        let mut state = make_state(4, 2);
        let result = clear_seat(
            &mut state,
            ClearFormDto {
                seat_number: Some("5".to_string()),
            },
        );
        assert_eq!(result.error.as_deref(), Some("Invalid seat number."));
    }

    #[test]
    fn test_clear_seat_returns_empty_seat() {
        let mut state = make_state(4, 2);
        assign_seat(&mut state, form("Asha", "1", "CS", "2"));

        let result = clear_seat(
            &mut state,
            ClearFormDto {
                seat_number: Some("2".to_string()),
            },
        );

        assert!(result.success);
        assert_eq!(result.data.unwrap().student, None);
    }

    #[test]
    fn test_get_summary_counts_occupied_seats() {
        let mut state = make_state(6, 3);
        assign_seat(&mut state, form("Asha", "1", "CS", "2"));
        assign_seat(&mut state, form("Ben", "2", "EE", "5"));

        let summary = get_summary(&state).data.unwrap();

        assert_eq!(
            summary,
            SeatingSummaryDto {
                total_seats: 6,
                occupied_seats: 2,
                domain_cap: 3,
            }
        );
    }

    #[test]
    fn test_render_seating_matches_desk_render() {
        let state = make_state(2, 1);
        assert_eq!(render_seating(&state).data.unwrap(), state.desk.render());
    }

    #[test]
    fn test_empty_seat_dto_omits_student_in_json() {
        let dto = SeatDto {
            seat_number: 9,
            student: None,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"seat_number":9}"#);
    }

    #[test]
    fn test_command_result_constructors_cover_every_outcome() {
        let done = CommandResult::ok(SeatDto {
            seat_number: 1,
            student: None,
        });
        let failed: CommandResult<SeatDto> = CommandResult::err("Invalid seat number.");
        let dismissed: CommandResult<SeatDto> = CommandResult::cancelled();

        assert!(done.success && done.error.is_none());
        assert_eq!(done.data.map(|seat| seat.seat_number), Some(1));
        assert!(!failed.success && failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("Invalid seat number."));
        assert!(!dismissed.success);
        assert!(dismissed.data.is_none() && dismissed.error.is_none());
    }
}
