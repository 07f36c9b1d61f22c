use anchor_lang::AccountDeserialize;
use anyhow::Result;
use lasagna_finance::{error::ErrorCode, states::STAKE_ACCOUNT_SEED};
use regex::Regex;
use solana_client::{
    client_error::ClientError,
    rpc_request::{RpcError, RpcResponseErrorData},
};
use solana_sdk::{
    account::Account, instruction::InstructionError, pubkey::Pubkey,
    transaction::TransactionError,
};

pub fn deserialize_anchor_account<T: AccountDeserialize>(account: &Account) -> Result<T> {
    let mut data: &[u8] = &account.data;
    T::try_deserialize(&mut data).map_err(Into::into)
}

pub fn get_stake_account_address(user: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (stake_account, _bump) = Pubkey::find_program_address(
        &[STAKE_ACCOUNT_SEED.as_bytes(), user.as_ref()],
        program_id,
    );
    stake_account
}

/// Message of the last Anchor error reported in `logs`, e.g.
/// `Restake time buffer not met`.
pub fn program_error_message_from_logs(logs: &[String]) -> Option<String> {
    let re = Regex::new(r"Error Message: (.+)\.$").ok()?;
    logs.iter()
        .rev()
        .find_map(|line| re.captures(line).map(|caps| caps[1].to_string()))
}

/// Maps a custom program error number back to its message.
pub fn program_error_message_from_code(code: u32) -> Option<String> {
    [
        ErrorCode::InvalidAmount,
        ErrorCode::RestakeTimeBufferNotMet,
        ErrorCode::MathOverflow,
        ErrorCode::InvalidOwner,
    ]
    .into_iter()
    .find(|e| u32::from(*e) == code)
    .map(|e| e.to_string())
}

/// Program error message carried by a failed RPC call, if any.
///
/// Preflight failures carry the simulation logs; confirmed failures only
/// carry the custom error number.
pub fn program_error_message(err: &anyhow::Error) -> Option<String> {
    let client_error = err.downcast_ref::<ClientError>()?;
    if let solana_client::client_error::ClientErrorKind::RpcError(RpcError::RpcResponseError {
        data: RpcResponseErrorData::SendTransactionPreflightFailure(result),
        ..
    }) = client_error.kind()
    {
        if let Some(message) = result
            .logs
            .as_deref()
            .and_then(program_error_message_from_logs)
        {
            return Some(message);
        }
    }
    match client_error.get_transaction_error()? {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            program_error_message_from_code(code)
        }
        _ => None,
    }
}
