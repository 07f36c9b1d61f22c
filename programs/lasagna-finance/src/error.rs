use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Restake time buffer not met")]
    RestakeTimeBufferNotMet,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,

    #[msg("Stake account owner does not match the signer")]
    InvalidOwner,
}
