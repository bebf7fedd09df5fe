//! Domain entities for exam seating.
//!
//! This module holds the business rules only: which seats exist, who sits
//! where, and how many students of one domain may be seated at the same time.
//! Nothing here reads input, prints output, or touches the file system, so
//! every rule can be unit-tested in isolation.
//!
//! Dependency order is `student` ← `seat` ← `arrangement`.

pub mod arrangement;
pub mod seat;
pub mod student;
