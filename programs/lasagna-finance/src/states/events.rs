use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: emitted for off-chain clients to follow stake account changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted after every successful `stake`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Staked {
    /// Staker.
    pub owner: Pubkey,
    /// Amount added by this call.
    pub amount: u64,
    /// Stake account balance after the call.
    pub total_staked: u64,
    pub timestamp: i64,
}

/// Emitted after every successful `withdraw`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Withdrawn {
    pub owner: Pubkey,
    /// Amount removed by this call.
    pub amount: u64,
    /// Stake account balance after the call.
    pub remaining: u64,
    pub timestamp: i64,
}

/// Emitted after every successful `restake`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Restaked {
    pub owner: Pubkey,
    /// Balance carried into the new lock period.
    pub amount: u64,
    pub timestamp: i64,
}
