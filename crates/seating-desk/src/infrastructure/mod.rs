//! Infrastructure layer for the seating desk.
//!
//! Contains the outward-facing adapters: the TOML configuration file,
//! logging setup, the command bridge used by a presentation layer, and the
//! terminal form that drives it.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `seating_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod console;
pub mod logging;
pub mod storage;
pub mod ui_bridge;
