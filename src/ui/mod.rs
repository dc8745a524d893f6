//! Console output for the CLI
//!
//! Library code never prints; everything user-facing flows through here.

pub mod context;
pub mod diff;
pub mod error;
pub mod printer;
pub mod terminal;
pub mod theme;
