use crate::error::ErrorCode;
use crate::states::{StakeAccount, Staked, STAKE_ACCOUNT_SEED};
use anchor_lang::prelude::*;

/// Accounts context for the `stake` instruction.
///
/// The stake account is created on the user's first stake and reused
/// afterwards, so repeated stakes accumulate into one record.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// Staker; pays for the stake account on first use.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = StakeAccount::LEN,
        seeds = [
            STAKE_ACCOUNT_SEED.as_bytes(),
            user.key().as_ref()
        ],
        bump,
    )]
    pub stake_account: Account<'info, StakeAccount>,

    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let stake_account = &mut ctx.accounts.stake_account;
    let user = ctx.accounts.user.key();

    if stake_account.owner == Pubkey::default() {
        stake_account.owner = user;
        stake_account.bump = ctx.bumps.stake_account;
    }
    require_keys_eq!(stake_account.owner, user, ErrorCode::InvalidOwner);

    let now = Clock::get()?.unix_timestamp;
    stake_account.deposit(amount, now)?;
    msg!("staked {} total {}", amount, stake_account.amount);

    emit!(Staked {
        owner: user,
        amount,
        total_staked: stake_account.amount,
        timestamp: now,
    });
    Ok(())
}
