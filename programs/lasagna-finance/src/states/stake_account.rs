use crate::error::ErrorCode;
use crate::RESTAKE_TIME_BUFFER;
use anchor_lang::prelude::*;

/// PDA seed string used to derive each user's stake account.
pub const STAKE_ACCOUNT_SEED: &str = "stake";

/// Staking record for a single user.
///
/// Derived from `STAKE_ACCOUNT_SEED + owner_pubkey` and created on the
/// owner's first `stake` call.
#[account]
#[derive(Default, Debug)]
pub struct StakeAccount {
    /// PDA bump for this account.
    pub bump: u8,

    /// User to whom this record belongs.
    pub owner: Pubkey,

    /// Amount currently staked.
    pub amount: u64,

    /// Unix timestamp of the last stake or restake.
    pub last_stake_timestamp: i64,
}

impl StakeAccount {
    /// Fixed serialized size of the account.
    ///
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: owner pubkey
    /// - 8: amount
    /// - 8: last stake timestamp
    pub const LEN: usize = 8 + 1 + 32 + 8 + 8;

    /// Adds `amount` to the stake and restarts the restake clock.
    pub fn deposit(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.last_stake_timestamp = now;
        Ok(())
    }

    /// Removes `amount` from the stake. The restake clock is left untouched.
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(
            amount > 0 && amount <= self.amount,
            ErrorCode::InvalidAmount
        );
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Restarts the restake clock once `RESTAKE_TIME_BUFFER` seconds have
    /// passed since the last stake or restake.
    pub fn restake(&mut self, now: i64) -> Result<()> {
        let elapsed = now
            .checked_sub(self.last_stake_timestamp)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(
            elapsed >= RESTAKE_TIME_BUFFER,
            ErrorCode::RestakeTimeBufferNotMet
        );
        self.last_stake_timestamp = now;
        Ok(())
    }

    /// Earliest unix timestamp at which `restake` is accepted.
    pub fn restake_available_at(&self) -> i64 {
        self.last_stake_timestamp
            .saturating_add(RESTAKE_TIME_BUFFER)
    }
}
