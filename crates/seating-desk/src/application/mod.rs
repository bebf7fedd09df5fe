//! Application layer use cases for the seating desk.
//!
//! This layer sits between the domain (`seating_core`) and the
//! infrastructure (terminal, config file, logging).  It turns raw operator
//! input into domain calls and domain state into text, and performs no I/O.
//!
//! # Sub-modules
//!
//! - **`validate_input`** – Checks the raw form fields for one user action and
//!   returns either a validated request or a tagged rejection.
//!
//! - **`manage_seating`** – Owns the [`Arrangement`](seating_core::Arrangement)
//!   and applies validated assign / clear requests to it.
//!
//! - **`render_seating`** – Produces the line-per-seat text shown after every
//!   action.

pub mod manage_seating;
pub mod render_seating;
pub mod validate_input;
