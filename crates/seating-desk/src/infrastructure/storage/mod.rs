//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration from the
//! platform-appropriate directory (or an explicit path), fills in defaults
//! when the file or a field is missing, and can write the effective
//! configuration back for the `--init-config` flag.
//!
//! Seating state itself is never written to disk.

pub mod config;
