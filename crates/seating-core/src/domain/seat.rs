//! A numbered exam seat.

use super::student::Student;

/// Seat identifier, fixed when the arrangement is built.
///
/// Real seats are numbered from 1.  The type is signed so that any integer an
/// operator types can be looked up and reported as a missing seat.
pub type SeatNumber = i32;

/// A single seat in the exam hall.
///
/// A seat is either empty or holds exactly one [`Student`].  The seat number
/// never changes; the occupant is only changed through
/// [`Arrangement`](super::arrangement::Arrangement), which is why the mutators
/// are crate-private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    number: SeatNumber,
    occupant: Option<Student>,
}

impl Seat {
    pub(crate) fn new(number: SeatNumber) -> Self {
        Self {
            number,
            occupant: None,
        }
    }

    pub fn number(&self) -> SeatNumber {
        self.number
    }

    /// The student currently on this seat, if any.
    pub fn occupant(&self) -> Option<&Student> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Returns `true` if the seat is occupied by a student of `domain`.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn is_held_by_domain(&self, domain: &str) -> bool {
        self.occupant
            .as_ref()
            .is_some_and(|student| student.domain() == domain)
    }

    pub(crate) fn place(&mut self, student: Student) {
        self.occupant = Some(student);
    }

    /// Empties the seat, returning the previous occupant.
    pub(crate) fn vacate(&mut self) -> Option<Student> {
        self.occupant.take()
    }
}
