//! State Module
//!
//! This module contains the persisted records and the stores that hold them.

pub mod pool_state;
pub mod store;
pub mod token_registry;

// Re-export all state types for easy access
pub use pool_state::*;
pub use store::*;
pub use token_registry::*;
