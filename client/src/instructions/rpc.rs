use anchor_lang::Discriminator;
use anyhow::Result;
use lasagna_finance::states::StakeAccount;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{
        RpcAccountInfoConfig, RpcProgramAccountsConfig, RpcSendTransactionConfig,
        RpcTransactionConfig,
    },
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_transaction_status::UiTransactionEncoding;

use crate::instructions::utils::deserialize_anchor_account;

pub fn send_txn(client: &RpcClient, txn: &Transaction, wait_confirm: bool) -> Result<Signature> {
    Ok(client.send_and_confirm_transaction_with_spinner_and_config(
        txn,
        if wait_confirm {
            CommitmentConfig::confirmed()
        } else {
            CommitmentConfig::processed()
        },
        RpcSendTransactionConfig::default(),
    )?)
}

/// Signs `instructions` with the payer and the user and submits them as one
/// transaction.
pub fn sign_and_send(
    client: &RpcClient,
    payer: &Keypair,
    user: &Keypair,
    instructions: &[Instruction],
) -> Result<Signature> {
    let mut signers = vec![payer];
    if user.pubkey() != payer.pubkey() {
        signers.push(user);
    }
    let recent_hash = client.get_latest_blockhash()?;
    let txn = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &signers,
        recent_hash,
    );
    send_txn(client, &txn, true)
}

/// Log messages of a confirmed transaction.
pub fn get_transaction_logs(client: &RpcClient, signature: &Signature) -> Result<Vec<String>> {
    let txn = client.get_transaction_with_config(
        signature,
        RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(CommitmentConfig::confirmed()),
            max_supported_transaction_version: Some(0),
        },
    )?;
    Ok(txn
        .transaction
        .meta
        .and_then(|meta| Option::<Vec<String>>::from(meta.log_messages))
        .unwrap_or_default())
}

pub fn fetch_stake_account(client: &RpcClient, address: &Pubkey) -> Result<Option<StakeAccount>> {
    let account = client
        .get_account_with_commitment(address, CommitmentConfig::confirmed())?
        .value;
    account
        .map(|account| deserialize_anchor_account::<StakeAccount>(&account))
        .transpose()
}

/// Every stake account owned by `program_id`.
pub fn fetch_all_stake_accounts(
    client: &RpcClient,
    program_id: &Pubkey,
) -> Result<Vec<(Pubkey, StakeAccount)>> {
    let config = RpcProgramAccountsConfig {
        filters: Some(vec![
            RpcFilterType::DataSize(StakeAccount::LEN as u64),
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                0,
                &StakeAccount::DISCRIMINATOR[..],
            )),
        ]),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            commitment: Some(CommitmentConfig::confirmed()),
            ..RpcAccountInfoConfig::default()
        },
        ..RpcProgramAccountsConfig::default()
    };
    client
        .get_program_accounts_with_config(program_id, config)?
        .into_iter()
        .map(|(address, account)| {
            deserialize_anchor_account::<StakeAccount>(&account)
                .map(|stake_account| (address, stake_account))
        })
        .collect()
}
