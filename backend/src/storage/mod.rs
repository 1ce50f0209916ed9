//! Storage abstraction and implementations.

pub mod memory;
pub mod traits;
