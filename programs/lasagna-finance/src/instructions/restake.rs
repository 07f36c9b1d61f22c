use crate::error::ErrorCode;
use crate::states::{Restaked, StakeAccount, STAKE_ACCOUNT_SEED};
use anchor_lang::prelude::*;

/// Accounts context for the `restake` instruction.
#[derive(Accounts)]
pub struct Restake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [
            STAKE_ACCOUNT_SEED.as_bytes(),
            user.key().as_ref()
        ],
        bump = stake_account.bump,
        constraint = stake_account.owner == user.key() @ ErrorCode::InvalidOwner,
    )]
    pub stake_account: Account<'info, StakeAccount>,
}

/// Starts a new lock period for the current stake.
///
/// Rejected with `RestakeTimeBufferNotMet` until `RESTAKE_TIME_BUFFER`
/// seconds have passed since the last stake or restake.
pub fn restake(ctx: Context<Restake>) -> Result<()> {
    let stake_account = &mut ctx.accounts.stake_account;
    let now = Clock::get()?.unix_timestamp;
    stake_account.restake(now)?;
    msg!("restaked {} at {}", stake_account.amount, now);

    emit!(Restaked {
        owner: stake_account.owner,
        amount: stake_account.amount,
        timestamp: now,
    });
    Ok(())
}
