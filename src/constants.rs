//! Constants for the Liquidity Bootstrapping Pool Program
//!
//! This module contains the protocol limits, the boosted repay fee and
//! the PDA seed prefixes used throughout the program.

use crate::types::FeeSchedule;

/// Weight value representing 100%
pub const MAX_WEIGHT: u32 = 100_000_000;

/// Smallest weight a pool may start or end with (2%)
pub const MIN_WEIGHT: u32 = MAX_WEIGHT / 50;

/// Target block time in seconds
pub const BLOCK_TIME_SECONDS: u64 = 6;

/// Maximum sale duration in blocks (14 days at 6 second blocks)
pub const MAX_SALE_DURATION: u64 = (60 * 60 * 24 / BLOCK_TIME_SECONDS) * 14;

/// Fee applied until the pool's repay target has been collected (20%)
pub const REPAY_FEE: FeeSchedule = FeeSchedule::new(2, 10);

/// PDA seed prefix for LBP pool accounts
pub const LBP_POOL_SEED_PREFIX: &[u8] = b"lbp_pool";

/// PDA seed prefix for XYK pool accounts
pub const XYK_POOL_SEED_PREFIX: &[u8] = b"xyk_pool";

/// Hash domain for LBP liquidity token ids
pub const LBP_SHARE_TOKEN_SEED_PREFIX: &[u8] = b"lbp_share_token";

/// Hash domain for XYK liquidity token ids
pub const XYK_SHARE_TOKEN_SEED_PREFIX: &[u8] = b"xyk_share_token";

/// PDA seed prefix for (fee collector, asset) fee tracking accounts
pub const FEE_COLLECTOR_ASSET_SEED_PREFIX: &[u8] = b"lbp_fee_collector_asset";

/// PDA seed prefix for the token registry counter account
pub const TOKEN_REGISTRY_SEED_PREFIX: &[u8] = b"token_registry";

/// PDA seed prefix for registry entries keyed by index
pub const TOKEN_REGISTRY_INDEX_SEED_PREFIX: &[u8] = b"token_registry_index";

/// PDA seed prefix for registry entries keyed by token id
pub const TOKEN_REGISTRY_ID_SEED_PREFIX: &[u8] = b"token_registry_id";
