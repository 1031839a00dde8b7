//! Command implementations

mod check;

pub use check::cmd_check;
