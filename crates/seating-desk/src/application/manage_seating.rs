//! ManageSeatingUseCase: applies operator actions to the arrangement.
//!
//! [`SeatingDesk`] owns the single [`Arrangement`] for the running exam.  It is
//! built once at startup and handed by reference to whatever drives the form;
//! there is no global instance.
//!
//! Two entry styles are offered:
//!
//! - [`SeatingDesk::assign`] / [`SeatingDesk::clear`] take already-validated
//!   requests and return domain errors only.
//! - [`SeatingDesk::submit_assignment`] / [`SeatingDesk::submit_clear`] take the
//!   raw form fields, validate them, and apply them, returning an
//!   [`ActionError`] that covers both input and domain failures.

use seating_core::{Arrangement, SeatNumber, SeatingError, Student};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::render_seating::render_arrangement;
use super::validate_input::{
    validate_assign_input, validate_clear_input, AssignRequest, ClearRequest, Field,
    InputRejection, RawAssignInput, RawClearInput,
};

/// Failure of a single operator action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Input(#[from] InputRejection),
    #[error(transparent)]
    Seating(#[from] SeatingError),
}

impl ActionError {
    /// Returns `true` when the operator dismissed a prompt.  The form shows
    /// nothing in that case.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ActionError::Input(InputRejection::Cancelled))
    }

    /// Operator-facing message shown in the message dialog.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Input(InputRejection::Cancelled) => "Input cancelled.".to_string(),
            ActionError::Input(InputRejection::EmptyField(_)) => {
                "Invalid input. Please enter valid details.".to_string()
            }
            ActionError::Input(InputRejection::InvalidNumericInput { field, .. }) => match field {
                Field::RollNumber => "Invalid roll number. Please enter a valid number.".to_string(),
                _ => "Invalid seat number. Please enter a valid number.".to_string(),
            },
            ActionError::Seating(SeatingError::SeatNotFound(_)) => "Invalid seat number.".to_string(),
            ActionError::Seating(SeatingError::SeatOccupied(_)) => {
                "Seat is already assigned to a student.".to_string()
            }
            ActionError::Seating(SeatingError::DomainCapReached { .. }) => {
                "Domain limit reached. Cannot assign seat to this student.".to_string()
            }
            ActionError::Seating(err) => err.to_string(),
        }
    }
}

/// The seating use case: one arrangement plus the operations on it.
#[derive(Debug, Clone)]
pub struct SeatingDesk {
    arrangement: Arrangement,
}

impl SeatingDesk {
    /// Creates a desk over a fresh arrangement.
    ///
    /// # Errors
    ///
    /// Propagates [`SeatingError::NoSeats`] / [`SeatingError::ZeroDomainCap`].
    pub fn new(total_seats: SeatNumber, domain_cap: u32) -> Result<Self, SeatingError> {
        Ok(Self {
            arrangement: Arrangement::new(total_seats, domain_cap)?,
        })
    }

    /// Builds a [`Student`] from `request` and seats them.
    ///
    /// # Errors
    ///
    /// Any [`SeatingError`] from [`Arrangement::assign_seat`]; the arrangement
    /// is unchanged in that case.
    pub fn assign(&mut self, request: AssignRequest) -> Result<SeatNumber, SeatingError> {
        let AssignRequest {
            name,
            roll_number,
            domain,
            seat_number,
        } = request;
        let student = Student::new(name, roll_number, domain);

        match self.arrangement.assign_seat(student, seat_number) {
            Ok(()) => {
                info!(seat_number, roll_number, "seat assigned");
                Ok(seat_number)
            }
            Err(err) => {
                warn!(seat_number, roll_number, error = %err, "seat assignment rejected");
                Err(err)
            }
        }
    }

    /// Empties the requested seat.
    ///
    /// # Errors
    ///
    /// [`SeatingError::SeatNotFound`] when the seat does not exist.
    pub fn clear(&mut self, request: ClearRequest) -> Result<SeatNumber, SeatingError> {
        let ClearRequest { seat_number } = request;
        match self.arrangement.clear_seat(seat_number) {
            Ok(()) => {
                info!(seat_number, "seat cleared");
                Ok(seat_number)
            }
            Err(err) => {
                warn!(seat_number, error = %err, "seat clear rejected");
                Err(err)
            }
        }
    }

    /// Validates raw assignment fields and applies them.
    ///
    /// # Errors
    ///
    /// [`ActionError::Input`] when validation fails (the arrangement is not
    /// consulted) or [`ActionError::Seating`] when the domain rejects it.
    pub fn submit_assignment(&mut self, raw: RawAssignInput) -> Result<SeatNumber, ActionError> {
        let request = validate_assign_input(raw).map_err(|rejection| {
            debug!(%rejection, "assignment input rejected");
            rejection
        })?;
        Ok(self.assign(request)?)
    }

    /// Validates a raw clear field and applies it.
    ///
    /// # Errors
    ///
    /// See [`SeatingDesk::submit_assignment`].
    pub fn submit_clear(&mut self, raw: RawClearInput) -> Result<SeatNumber, ActionError> {
        let request = validate_clear_input(raw).map_err(|rejection| {
            debug!(%rejection, "clear input rejected");
            rejection
        })?;
        Ok(self.clear(request)?)
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Renders the current state as text.
    pub fn render(&self) -> String {
        render_arrangement(&self.arrangement)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, roll: &str, domain: &str, seat: &str) -> RawAssignInput {
        RawAssignInput {
            name: Some(name.to_string()),
            roll_number: Some(roll.to_string()),
            domain: Some(domain.to_string()),
            seat_number: Some(seat.to_string()),
        }
    }

    fn clear_raw(seat: &str) -> RawClearInput {
        RawClearInput {
            seat_number: Some(seat.to_string()),
        }
    }

    #[test]
    fn test_submit_assignment_seats_student() {
        // Arrange
        let mut desk = SeatingDesk::new(5, 3).unwrap();

        // Act
        let seat = desk.submit_assignment(raw("Asha", "1021", "CS", "4")).unwrap();

        // Assert
        assert_eq!(seat, 4);
        let occupant = desk.arrangement().seat(4).unwrap().occupant().unwrap();
        assert_eq!(occupant.name(), "Asha");
        assert_eq!(occupant.roll_number(), 1021);
    }

    #[test]
    fn test_submit_assignment_with_bad_input_does_not_touch_arrangement() {
        let mut desk = SeatingDesk::new(5, 3).unwrap();

        let err = desk.submit_assignment(raw("Asha", "abc", "CS", "4")).unwrap_err();

        assert!(matches!(err, ActionError::Input(_)));
        assert_eq!(desk.arrangement().occupied_count(), 0);
    }

    #[test]
    fn test_submit_assignment_surfaces_domain_errors() {
        let mut desk = SeatingDesk::new(5, 1).unwrap();
        desk.submit_assignment(raw("Asha", "1", "CS", "1")).unwrap();

        let err = desk.submit_assignment(raw("Ben", "2", "CS", "2")).unwrap_err();

        assert_eq!(
            err,
            ActionError::Seating(SeatingError::DomainCapReached {
                domain: "CS".to_string(),
                cap: 1
            })
        );
    }

    #[test]
    fn test_submit_clear_empties_seat_and_rejects_unknown_seat() {
        let mut desk = SeatingDesk::new(3, 3).unwrap();
        desk.submit_assignment(raw("Asha", "1", "CS", "2")).unwrap();

        assert_eq!(desk.submit_clear(clear_raw("2")), Ok(2));
        assert!(!desk.arrangement().seat(2).unwrap().is_occupied());
        assert_eq!(
            desk.submit_clear(clear_raw("9")),
            Err(ActionError::Seating(SeatingError::SeatNotFound(9)))
        );
    }

    #[test]
    fn test_negative_seat_is_an_unknown_seat_for_assign_and_clear() {
        let mut desk = SeatingDesk::new(5, 3).unwrap();
        desk.submit_assignment(raw("Asha", "1", "CS", "3")).unwrap();
        let before = desk.arrangement().seats().to_vec();

        let assign_err = desk.submit_assignment(raw("Ben", "2", "EE", "-1")).unwrap_err();
        let clear_err = desk.submit_clear(clear_raw(" -1 ")).unwrap_err();

        assert_eq!(assign_err, ActionError::Seating(SeatingError::SeatNotFound(-1)));
        assert_eq!(assign_err.user_message(), "Invalid seat number.");
        assert_eq!(clear_err, ActionError::Seating(SeatingError::SeatNotFound(-1)));
        assert_eq!(desk.arrangement().seats(), before.as_slice());
    }

    #[test]
    fn test_negative_roll_number_is_accepted() {
        let mut desk = SeatingDesk::new(5, 3).unwrap();

        let seat = desk.submit_assignment(raw("Asha", "-7", "CS", "2")).unwrap();

        let occupant = desk.arrangement().seat(seat).unwrap().occupant().unwrap();
        assert_eq!(occupant.roll_number(), -7);
    }

    #[test]
    fn test_blank_seat_number_is_a_silent_cancellation() {
        let mut desk = SeatingDesk::new(5, 3).unwrap();

        let assign_err = desk.submit_assignment(raw("Asha", "1", "CS", "")).unwrap_err();
        let clear_err = desk.submit_clear(clear_raw("")).unwrap_err();

        assert!(assign_err.is_cancellation());
        assert!(clear_err.is_cancellation());
        assert_eq!(desk.arrangement().occupied_count(), 0);
    }

    #[test]
    fn test_render_reflects_assign_and_clear() {
        let mut desk = SeatingDesk::new(2, 2).unwrap();
        desk.submit_assignment(raw("Asha", "1021", "CS", "1")).unwrap();
        assert!(desk
            .render()
            .contains("Seat Number: 1, Student Name: Asha, Roll Number: 1021, Domain: CS"));

        desk.submit_clear(clear_raw("1")).unwrap();
        assert!(desk.render().contains("Seat Number: 1\n"));
    }

    #[test]
    fn test_user_messages_match_each_failure_kind() {
        let cases = [
            (
                ActionError::Seating(SeatingError::DomainCapReached {
                    domain: "CS".to_string(),
                    cap: 3,
                }),
                "Domain limit reached. Cannot assign seat to this student.",
            ),
            (
                ActionError::Seating(SeatingError::SeatOccupied(1)),
                "Seat is already assigned to a student.",
            ),
            (
                ActionError::Seating(SeatingError::SeatNotFound(51)),
                "Invalid seat number.",
            ),
            (
                ActionError::Input(InputRejection::EmptyField(Field::Name)),
                "Invalid input. Please enter valid details.",
            ),
            (
                ActionError::Input(InputRejection::InvalidNumericInput {
                    field: Field::RollNumber,
                    value: "x".to_string(),
                }),
                "Invalid roll number. Please enter a valid number.",
            ),
            (
                ActionError::Input(InputRejection::InvalidNumericInput {
                    field: Field::SeatNumber,
                    value: "x".to_string(),
                }),
                "Invalid seat number. Please enter a valid number.",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.user_message(), expected);
        }
    }

    #[test]
    fn test_cancellation_is_detected() {
        assert!(ActionError::Input(InputRejection::Cancelled).is_cancellation());
        assert!(!ActionError::Seating(SeatingError::SeatOccupied(1)).is_cancellation());
    }
}
