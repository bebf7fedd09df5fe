//! Exam seating arrangement domain entity.
//!
//! An [`Arrangement`] is created once with a fixed number of seats, numbered
//! `1..=total_seats`, and a domain cap.  Seats are never added or removed
//! afterwards.  All lookups are linear scans: seat counts are in the tens, and
//! the domain count is recomputed on every assignment instead of being cached.

use thiserror::Error;
use tracing::{debug, trace};

use super::seat::{Seat, SeatNumber};
use super::student::Student;

/// Errors returned by arrangement construction and seat operations.
///
/// A rejected operation never mutates any seat.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatingError {
    /// No seat carries the requested number.
    #[error("seat {0} does not exist")]
    SeatNotFound(SeatNumber),

    /// The seat already has an occupant.
    #[error("seat {0} is already assigned to a student")]
    SeatOccupied(SeatNumber),

    /// Seating another student of this domain would exceed the cap.
    #[error("domain '{domain}' already holds {cap} seat(s), the configured maximum")]
    DomainCapReached { domain: String, cap: u32 },

    /// An arrangement must have at least one seat.
    #[error("an arrangement needs at least one seat")]
    NoSeats,

    /// A domain cap of zero would reject every assignment.
    #[error("domain cap must be at least 1")]
    ZeroDomainCap,
}

/// The seating plan for one exam.
///
/// Invariants upheld by every operation:
///
/// - for each domain, the number of occupied seats held by that domain never
///   exceeds [`domain_cap`](Self::domain_cap);
/// - each seat number maps to exactly one seat for the arrangement's lifetime;
/// - a seat holds at most one student.
#[derive(Debug, Clone)]
pub struct Arrangement {
    /// Seats in ascending number order; length is fixed at construction.
    seats: Vec<Seat>,
    domain_cap: u32,
}

impl Arrangement {
    /// Creates an arrangement with seats `1..=total_seats`, all empty.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::NoSeats`] when `total_seats` is not positive
    /// and [`SeatingError::ZeroDomainCap`] when `domain_cap` is zero.
    pub fn new(total_seats: SeatNumber, domain_cap: u32) -> Result<Self, SeatingError> {
        if total_seats <= 0 {
            return Err(SeatingError::NoSeats);
        }
        if domain_cap == 0 {
            return Err(SeatingError::ZeroDomainCap);
        }

        let seats = (1..=total_seats).map(Seat::new).collect();
        debug!(total_seats, domain_cap, "arrangement created");
        Ok(Self { seats, domain_cap })
    }

    /// Places `student` on seat `seat_number`.
    ///
    /// Checks run in this order, and the first failure is returned:
    ///
    /// 1. the seat must exist;
    /// 2. the seat must be empty (an occupant is never overwritten);
    /// 3. fewer than `domain_cap` seats may currently be held by the student's
    ///    domain.
    ///
    /// # Errors
    ///
    /// [`SeatingError::SeatNotFound`], [`SeatingError::SeatOccupied`], or
    /// [`SeatingError::DomainCapReached`].  On error the student is dropped and
    /// no seat changes.
    pub fn assign_seat(&mut self, student: Student, seat_number: SeatNumber) -> Result<(), SeatingError> {
        let index = self
            .index_of(seat_number)
            .ok_or(SeatingError::SeatNotFound(seat_number))?;
        if self.seats[index].is_occupied() {
            return Err(SeatingError::SeatOccupied(seat_number));
        }
        if self.is_domain_cap_reached(student.domain()) {
            return Err(SeatingError::DomainCapReached {
                domain: student.domain().to_string(),
                cap: self.domain_cap,
            });
        }

        trace!(seat_number, domain = student.domain(), "placing student");
        self.seats[index].place(student);
        Ok(())
    }

    /// Empties seat `seat_number`.
    ///
    /// Clearing an already-empty seat succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::SeatNotFound`] if no seat has that number.
    pub fn clear_seat(&mut self, seat_number: SeatNumber) -> Result<(), SeatingError> {
        let index = self
            .index_of(seat_number)
            .ok_or(SeatingError::SeatNotFound(seat_number))?;
        if let Some(previous) = self.seats[index].vacate() {
            trace!(seat_number, domain = previous.domain(), "seat vacated");
        }
        Ok(())
    }

    /// All seats in ascending seat-number order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Looks up a seat by number.
    pub fn seat(&self, seat_number: SeatNumber) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.number() == seat_number)
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn domain_cap(&self) -> u32 {
        self.domain_cap
    }

    /// Number of seats that currently have an occupant.
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_occupied()).count()
    }

    /// Number of occupied seats held by students of `domain`.
    pub fn domain_count(&self, domain: &str) -> usize {
        self.seats
            .iter()
            .filter(|seat| seat.is_held_by_domain(domain))
            .count()
    }

    /// Returns `true` when `domain` already holds `domain_cap` seats.
    ///
    /// The scan stops as soon as the cap is reached.
    pub fn is_domain_cap_reached(&self, domain: &str) -> bool {
        let cap = self.domain_cap as usize;
        let held = self
            .seats
            .iter()
            .filter(|seat| seat.is_held_by_domain(domain))
            .take(cap)
            .count();
        held >= cap
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn index_of(&self, seat_number: SeatNumber) -> Option<usize> {
        self.seats.iter().position(|seat| seat.number() == seat_number)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
