pub mod assessment;
pub mod brackets;
pub mod parts;
pub mod schedule;

pub use assessment::{calculate_tax, Assessment};
