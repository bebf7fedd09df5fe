//! ValidateInput: turns raw form fields into validated requests.
//!
//! The form collects every field of an action first and then hands them here
//! in one call.  The result is either a fully-typed request that can go
//! straight to the domain, or an [`InputRejection`] naming the first problem.
//! Rejected input never reaches `seating_core`.
//!
//! Each raw field is an `Option<String>`: `None` means the operator dismissed
//! that prompt.  A blank seat number is treated the same way, so the action is
//! dropped without a message.

use std::fmt;

use seating_core::{RollNumber, SeatNumber};
use thiserror::Error;

/// A form field, used to tag rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    RollNumber,
    Domain,
    SeatNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::RollNumber => "roll number",
            Field::Domain => "domain",
            Field::SeatNumber => "seat number",
        };
        f.write_str(label)
    }
}

/// Why a set of raw fields was not turned into a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputRejection {
    /// The operator cancelled one of the prompts or left the seat number blank.
    #[error("input cancelled")]
    Cancelled,

    /// A required field was empty or whitespace-only.
    #[error("{0} must not be empty")]
    EmptyField(Field),

    /// A numeric field did not parse as an integer.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumericInput { field: Field, value: String },
}

/// Raw fields of the "Assign Seat" action, in prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAssignInput {
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub domain: Option<String>,
    pub seat_number: Option<String>,
}

/// Raw field of the "Clear Seat" action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawClearInput {
    pub seat_number: Option<String>,
}

/// A validated assignment, ready to become a `Student`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignRequest {
    pub name: String,
    pub roll_number: RollNumber,
    pub domain: String,
    pub seat_number: SeatNumber,
}

/// A validated clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearRequest {
    pub seat_number: SeatNumber,
}

/// Validates the fields of an assignment.
///
/// Checks run in prompt order and the first failure wins:
/// cancellation, empty name / roll number / domain, non-numeric roll number,
/// blank seat number (reported as cancellation), non-numeric seat number.
///
/// # Errors
///
/// Returns the [`InputRejection`] describing the first invalid field.
pub fn validate_assign_input(raw: RawAssignInput) -> Result<AssignRequest, InputRejection> {
    let RawAssignInput {
        name,
        roll_number,
        domain,
        seat_number,
    } = raw;

    let (Some(name), Some(roll_number), Some(domain), Some(seat_number)) =
        (name, roll_number, domain, seat_number)
    else {
        return Err(InputRejection::Cancelled);
    };

    require_non_blank(Field::Name, &name)?;
    require_non_blank(Field::RollNumber, &roll_number)?;
    require_non_blank(Field::Domain, &domain)?;
    let roll_number = parse_number(Field::RollNumber, &roll_number)?;

    let seat_number = parse_seat_number(&seat_number)?;

    Ok(AssignRequest {
        name,
        roll_number,
        domain,
        seat_number,
    })
}

/// Validates the seat number of a clear action.
///
/// # Errors
///
/// [`InputRejection::Cancelled`] for a dismissed or blank prompt, or
/// [`InputRejection::InvalidNumericInput`].
pub fn validate_clear_input(raw: RawClearInput) -> Result<ClearRequest, InputRejection> {
    let seat_number = raw.seat_number.ok_or(InputRejection::Cancelled)?;
    let seat_number = parse_seat_number(&seat_number)?;
    Ok(ClearRequest { seat_number })
}

fn require_non_blank(field: Field, value: &str) -> Result<(), InputRejection> {
    if value.trim().is_empty() {
        return Err(InputRejection::EmptyField(field));
    }
    Ok(())
}

/// Any integer is accepted here; whether the seat exists is for the
/// arrangement to decide.
fn parse_seat_number(value: &str) -> Result<SeatNumber, InputRejection> {
    if value.trim().is_empty() {
        return Err(InputRejection::Cancelled);
    }
    parse_number(Field::SeatNumber, value)
}

fn parse_number(field: Field, value: &str) -> Result<i32, InputRejection> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| InputRejection::InvalidNumericInput {
            field,
            value: value.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
