//! Processors Module
//!
//! This module contains all processor functions organized by functionality.

pub mod fees;
pub mod migration;
pub mod pool_creation;
pub mod pool_management;
pub mod pricing;
pub mod swap;
pub mod utilities;
pub mod xyk;

// Re-export instruction processors
pub use migration::process_migrate_pool;
pub use pool_creation::process_create_pool;
pub use pool_management::{process_add_liquidity, process_update_pool_data};
pub use swap::process_sell;

// Re-export fee and pricing functions
pub use fees::*;
pub use pricing::*;
