//! Terminal output for the CLI

pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
pub mod text;
pub mod theme;
