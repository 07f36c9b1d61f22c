use anchor_client::{Client, Cluster, Program};
use anyhow::Result;
use solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Keypair, system_instruction,
    system_program,
};
use std::rc::Rc;

use lasagna_finance::accounts as lasagna_accounts;
use lasagna_finance::instruction as lasagna_instructions;

use crate::instructions::utils::get_stake_account_address;
use crate::{read_keypair_file, ClientConfig};

fn lasagna_program(config: &ClientConfig) -> Result<Program<Rc<Keypair>>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    Ok(client.program(config.lasagna_program)?)
}

pub fn stake_instr(config: &ClientConfig, user: Pubkey, amount: u64) -> Result<Vec<Instruction>> {
    let program = lasagna_program(config)?;

    let instructions = program
        .request()
        .accounts(lasagna_accounts::Stake {
            user,
            stake_account: get_stake_account_address(&user, &program.id()),
            system_program: system_program::id(),
        })
        .args(lasagna_instructions::Stake { amount })
        .instructions()?;
    Ok(instructions)
}

pub fn withdraw_instr(
    config: &ClientConfig,
    user: Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>> {
    let program = lasagna_program(config)?;

    let instructions = program
        .request()
        .accounts(lasagna_accounts::Withdraw {
            user,
            stake_account: get_stake_account_address(&user, &program.id()),
        })
        .args(lasagna_instructions::Withdraw { amount })
        .instructions()?;
    Ok(instructions)
}

pub fn restake_instr(config: &ClientConfig, user: Pubkey) -> Result<Vec<Instruction>> {
    let program = lasagna_program(config)?;

    let instructions = program
        .request()
        .accounts(lasagna_accounts::Restake {
            user,
            stake_account: get_stake_account_address(&user, &program.id()),
        })
        .args(lasagna_instructions::Restake {})
        .instructions()?;
    Ok(instructions)
}

/// Transfer that lets `user` pay rent for a new stake account.
///
/// After paying `rent` the user must be left with either nothing or at least
/// `user_minimum` (the rent-exempt minimum of a system account). Empty when
/// that already holds or when the user is the payer itself.
pub fn fund_user_instr(
    payer: &Pubkey,
    user: &Pubkey,
    user_balance: u64,
    rent: u64,
    user_minimum: u64,
) -> Vec<Instruction> {
    let needed = rent.saturating_add(user_minimum);
    if payer == user || user_balance == rent || user_balance >= needed {
        return Vec::new();
    }
    vec![system_instruction::transfer(
        payer,
        user,
        needed - user_balance,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::{Discriminator, InstructionData};
    use solana_sdk::signature::{write_keypair_file, Signer};

    fn test_config() -> ClientConfig {
        let payer = Keypair::new();
        let path = std::env::temp_dir().join(format!("lasagna-payer-{}.json", payer.pubkey()));
        write_keypair_file(&payer, &path).unwrap();
        ClientConfig {
            http_url: "http://127.0.0.1:8899".to_string(),
            ws_url: "ws://127.0.0.1:8900".to_string(),
            payer_path: path.to_string_lossy().into_owned(),
            lasagna_program: lasagna_finance::id(),
        }
    }

    #[test]
    fn stake_instruction_layout() {
        let config = test_config();
        let user = Pubkey::new_unique();
        let ixs = stake_instr(&config, user, 100).unwrap();
        assert_eq!(ixs.len(), 1);

        let ix = &ixs[0];
        assert_eq!(ix.program_id, lasagna_finance::id());
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[0].pubkey, user);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(
            ix.accounts[1].pubkey,
            get_stake_account_address(&user, &lasagna_finance::id())
        );
        assert!(ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, system_program::id());

        assert_eq!(ix.data, lasagna_instructions::Stake { amount: 100 }.data());
        assert!(ix.data.starts_with(&lasagna_instructions::Stake::DISCRIMINATOR[..]));
        assert_eq!(&ix.data[ix.data.len() - 8..], &100u64.to_le_bytes());
    }

    #[test]
    fn withdraw_instruction_layout() {
        let config = test_config();
        let user = Pubkey::new_unique();
        let ixs = withdraw_instr(&config, user, 100).unwrap();
        assert_eq!(ixs.len(), 1);
        assert_eq!(ixs[0].accounts.len(), 2);
        assert_eq!(ixs[0].data, lasagna_instructions::Withdraw { amount: 100 }.data());
    }

    #[test]
    fn restake_instruction_has_no_arguments() {
        let config = test_config();
        let user = Pubkey::new_unique();
        let ixs = restake_instr(&config, user).unwrap();
        assert_eq!(ixs[0].accounts.len(), 2);
        assert_eq!(ixs[0].data, &lasagna_instructions::Restake::DISCRIMINATOR[..]);
    }

    #[test]
    fn missing_payer_file_is_an_error() {
        let mut config = test_config();
        config.payer_path = "/nonexistent/payer.json".to_string();
        assert!(restake_instr(&config, Pubkey::new_unique()).is_err());
    }

    const STAKE_RENT: u64 = 1_287_600;
    const USER_MINIMUM: u64 = 890_880;

    #[test]
    fn skips_funding_when_balance_suffices() {
        let payer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let needed = STAKE_RENT + USER_MINIMUM;
        assert!(fund_user_instr(&payer, &user, needed, STAKE_RENT, USER_MINIMUM).is_empty());
        assert!(fund_user_instr(&payer, &user, 10 * needed, STAKE_RENT, USER_MINIMUM).is_empty());
        assert!(fund_user_instr(&payer, &payer, 0, STAKE_RENT, USER_MINIMUM).is_empty());
    }

    #[test]
    fn exact_rent_leaves_an_empty_user() {
        let payer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        assert!(fund_user_instr(&payer, &user, STAKE_RENT, STAKE_RENT, USER_MINIMUM).is_empty());
    }

    #[test]
    fn tops_up_balance_just_above_rent() {
        let payer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let balance = STAKE_RENT + 1;
        let ixs = fund_user_instr(&payer, &user, balance, STAKE_RENT, USER_MINIMUM);
        assert_eq!(ixs.len(), 1);
        assert_eq!(ixs[0].program_id, system_program::id());
        assert_eq!(ixs[0].accounts[0].pubkey, payer);
        assert_eq!(ixs[0].accounts[1].pubkey, user);
        assert_eq!(
            ixs[0].data,
            system_instruction::transfer(&payer, &user, STAKE_RENT + USER_MINIMUM - balance).data
        );
    }

    #[test]
    fn funds_an_empty_user() {
        let payer = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let ixs = fund_user_instr(&payer, &user, 0, STAKE_RENT, USER_MINIMUM);
        assert_eq!(
            ixs[0].data,
            system_instruction::transfer(&payer, &user, STAKE_RENT + USER_MINIMUM).data
        );
    }
}
