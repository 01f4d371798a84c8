//! Command implementations

mod demo;
mod overdue;

pub use demo::demo;
pub use overdue::overdue;
