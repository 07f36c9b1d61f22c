use crate::error::ErrorCode;
use crate::states::{StakeAccount, Withdrawn, STAKE_ACCOUNT_SEED};
use anchor_lang::prelude::*;

/// Accounts context for the `withdraw` instruction.
#[derive(Accounts)]
pub struct Withdraw<'info> {
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

/// Reduces the staked amount. Fails with `InvalidAmount` when `amount` is zero
/// or larger than the current stake.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let stake_account = &mut ctx.accounts.stake_account;
    stake_account.withdraw(amount)?;
    msg!("withdrew {} remaining {}", amount, stake_account.amount);

    emit!(Withdrawn {
        owner: stake_account.owner,
        amount,
        remaining: stake_account.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
