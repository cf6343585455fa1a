//! Library crate root re-exporting the checker and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod check;
pub mod cli;
