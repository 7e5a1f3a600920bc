/// Chess domain types.
pub mod chess;
/// The rule engine.
pub mod atomic;
/// Assorted utilities.
pub mod util;
