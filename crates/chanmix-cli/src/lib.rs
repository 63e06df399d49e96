//! chanmix CLI library.
//!
//! Command implementations and WAV I/O for the `chanmix` binary.

pub mod commands;
pub mod wav;
