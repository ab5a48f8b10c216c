//! Library portion of the Tonic Ear CLI.
//!
//! The binary in `main.rs` stays a thin argument parser; all command
//! logic lives in [`commands`] so it can be exercised from tests.

pub mod commands;
