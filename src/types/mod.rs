//! Types Module
//!
//! This module contains the token identity types and instruction definitions
//! for the Liquidity Bootstrapping Pool Program.

pub mod instructions;
pub mod token;

// Re-export all types for easy access
pub use instructions::*;
pub use token::*;
