//! Atelier CLI library
//!
//! Exposed as a lib target so integration tests can exercise the command
//! surface without spawning the binary.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod render;
