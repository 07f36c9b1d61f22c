use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

declare_id!("3v3STGegvYRDWb7GkQL5QzCbygVNDDapJrrLrXPd2zAT");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Lasagna Finance",
    project_url: "https://lasagna.finance",
    contacts: "email:security@lasagna.finance",
    policy: "https://lasagna.finance/security"
}

/// Minimum number of seconds between a stake (or restake) and the next restake.
pub const RESTAKE_TIME_BUFFER: i64 = 86_400;

pub mod error;
pub mod instructions;
pub mod states;

use instructions::*;

#[program]
pub mod lasagna_finance {

    use super::*;

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn restake(ctx: Context<Restake>) -> Result<()> {
        instructions::restake(ctx)
    }
}
