//! Utility Functions
//!
//! This module contains shared utility functions used throughout the program.
//! These utilities are organized by functionality: address derivation, pool
//! math, serialization and input validation.

pub mod derivation;
pub mod math;
pub mod serialization;
pub mod validation;

// Re-export commonly used items for convenience
pub use derivation::*;
pub use math::*;
pub use serialization::*;
pub use validation::*;
