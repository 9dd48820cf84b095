//! Utility modules.

pub mod plural;

pub use plural::plural_count;
