//! # seating-core
//!
//! Domain library for the exam seating arrangement system.
//!
//! The crate has no dependencies on terminals, files, or UI frameworks.  It
//! keeps a fixed list of numbered seats, places students on them, and makes
//! sure no subject domain holds more seats at once than the configured cap.
//!
//! # Architecture overview
//!
//! - **`domain::student`** – [`Student`], an immutable record of name, roll
//!   number, and domain.
//! - **`domain::seat`** – [`Seat`], a numbered slot holding at most one
//!   student.  Only the arrangement may change who sits there.
//! - **`domain::arrangement`** – [`Arrangement`], which owns every seat and the
//!   domain-cap policy and exposes assign / clear / list operations.
//!
//! The `seating-desk` crate wraps this library with input validation, a TOML
//! configuration file, and a terminal form.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `seating_core::Arrangement` instead of the full module path.
pub use domain::arrangement::{Arrangement, SeatingError};
pub use domain::seat::{Seat, SeatNumber};
pub use domain::student::{RollNumber, Student};
