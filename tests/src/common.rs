use anchor_lang::{
    AccountDeserialize, AnchorDeserialize, Discriminator, InstructionData, ToAccountMetas,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use lasagna_finance::states::{StakeAccount, Staked, STAKE_ACCOUNT_SEED};
use litesvm::{
    types::{FailedTransactionMetadata, TransactionMetadata},
    LiteSVM,
};
use solana_clock::Clock;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_native_token::LAMPORTS_PER_SOL;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;
use std::path::PathBuf;

pub fn program_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("deploy")
        .join("lasagna_finance.so")
}

pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program_from_file(lasagna_finance::id(), program_path())
        .expect("Failed to load program, run `anchor build` first");
    svm
}

/// Fresh identity funded with 2 SOL.
pub fn funded_user(svm: &mut LiteSVM) -> Keypair {
    let user = Keypair::new();
    svm.airdrop(&user.pubkey(), 2 * LAMPORTS_PER_SOL)
        .expect("Airdrop failed");
    user
}

pub fn stake_account_address(user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[STAKE_ACCOUNT_SEED.as_bytes(), user.as_ref()],
        &lasagna_finance::id(),
    )
    .0
}

pub fn stake_ix(user: &Pubkey, stake_account: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: lasagna_finance::id(),
        accounts: lasagna_finance::accounts::Stake {
            user: *user,
            stake_account: *stake_account,
            system_program: solana_sdk_ids::system_program::ID,
        }
        .to_account_metas(None),
        data: lasagna_finance::instruction::Stake { amount }.data(),
    }
}

pub fn withdraw_ix(user: &Pubkey, stake_account: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: lasagna_finance::id(),
        accounts: lasagna_finance::accounts::Withdraw {
            user: *user,
            stake_account: *stake_account,
        }
        .to_account_metas(None),
        data: lasagna_finance::instruction::Withdraw { amount }.data(),
    }
}

pub fn restake_ix(user: &Pubkey, stake_account: &Pubkey) -> Instruction {
    Instruction {
        program_id: lasagna_finance::id(),
        accounts: lasagna_finance::accounts::Restake {
            user: *user,
            stake_account: *stake_account,
        }
        .to_account_metas(None),
        data: lasagna_finance::instruction::Restake {}.data(),
    }
}

pub fn send(
    svm: &mut LiteSVM,
    user: &Keypair,
    ix: Instruction,
) -> Result<TransactionMetadata, FailedTransactionMetadata> {
    let msg = Message::new(&[ix], Some(&user.pubkey()));
    let tx = Transaction::new(&[user], msg, svm.latest_blockhash());
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    result
}

pub fn fetch_stake_account(svm: &LiteSVM, address: &Pubkey) -> Option<StakeAccount> {
    let account = svm.get_account(address)?;
    StakeAccount::try_deserialize(&mut account.data.as_slice()).ok()
}

pub fn advance_clock(svm: &mut LiteSVM, seconds: i64) -> i64 {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp += seconds;
    svm.set_sysvar::<Clock>(&clock);
    clock.unix_timestamp
}

pub fn now(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<Clock>().unix_timestamp
}

/// `Staked` events found in `Program data:` log lines.
pub fn staked_events(logs: &[String]) -> Vec<Staked> {
    logs.iter()
        .filter_map(|line| line.strip_prefix("Program data: "))
        .filter_map(|data| STANDARD.decode(data).ok())
        .filter_map(|data| {
            data.strip_prefix(&Staked::DISCRIMINATOR[..])
                .and_then(|payload| Staked::try_from_slice(payload).ok())
        })
        .collect()
}

/// Message of the Anchor error reported in `logs`.
pub fn error_message(logs: &[String]) -> Option<String> {
    logs.iter().rev().find_map(|line| {
        let (_, message) = line.split_once("Error Message: ")?;
        Some(message.trim_end_matches('.').to_string())
    })
}
