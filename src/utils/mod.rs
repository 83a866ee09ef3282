pub mod decimal;

pub use decimal::{truncate, truncate_mw};
