use anyhow::Result;
use clap::Parser;
use colorful::Colorful;
use lasagna_client::instructions::events::parse_program_events;
use lasagna_client::instructions::rpc::*;
use lasagna_client::instructions::stake_instructions::*;
use lasagna_client::instructions::utils::{get_stake_account_address, program_error_message};
use lasagna_client::{load_cfg, read_keypair_file, user_keypair, DEFAULT_CONFIG_PATH};
use lasagna_finance::states::StakeAccount;
use serde::Serialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Signature, Signer},
};

#[derive(Debug, Parser)]
#[command(name = "lasagna", about = "Lasagna Finance staking client")]
pub struct Opts {
    /// Client configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// User keypair file. A fresh keypair is generated when omitted.
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[clap(subcommand)]
    pub command: LasagnaCommands,
}

#[derive(Debug, Parser)]
pub enum LasagnaCommands {
    /// Stake an amount of tokens
    Stake {
        /// Amount to stake
        #[arg(short, long)]
        amount: u64,
    },
    /// Withdraw staked tokens
    Withdraw {
        /// Amount to withdraw
        #[arg(short, long)]
        amount: u64,
    },
    /// Restake tokens
    Restake {},
    /// Print a stake account
    Show {
        /// Stake owner, defaults to the user
        #[arg(long)]
        owner: Option<Pubkey>,
        #[arg(long)]
        json: bool,
    },
    /// Print every stake account of the program
    List {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct StakeAccountView {
    address: String,
    owner: String,
    amount: u64,
    last_stake_timestamp: i64,
    restake_available_at: i64,
}

impl StakeAccountView {
    fn new(address: &Pubkey, account: &StakeAccount) -> Self {
        Self {
            address: address.to_string(),
            owner: account.owner.to_string(),
            amount: account.amount,
            last_stake_timestamp: account.last_stake_timestamp,
            restake_available_at: account.restake_available_at(),
        }
    }

    fn print(&self) {
        println!("stake account {}", self.address);
        println!("  owner                {}", self.owner);
        println!("  amount               {}", self.amount);
        println!("  last stake timestamp {}", self.last_stake_timestamp);
        println!("  restake available at {}", self.restake_available_at);
    }
}

fn print_events(rpc_client: &RpcClient, signature: &Signature, program_id: &Pubkey) {
    match get_transaction_logs(rpc_client, signature) {
        Ok(logs) => {
            for event in parse_program_events(&logs, program_id) {
                println!("{}", event);
            }
        }
        Err(err) => println!("{}", format!("could not fetch logs: {}", err).yellow()),
    }
}

fn run(opts: Opts) -> Result<()> {
    let config = load_cfg(&opts.config)?;
    let payer = read_keypair_file(&config.payer_path)?;
    let user = user_keypair(opts.user.as_deref())?;
    let rpc_client = RpcClient::new(config.http_url.to_string());
    let program_id = config.lasagna_program;

    match opts.command {
        LasagnaCommands::Stake { amount } => {
            let mut instructions = Vec::new();
            let stake_account = get_stake_account_address(&user.pubkey(), &program_id);
            if fetch_stake_account(&rpc_client, &stake_account)?.is_none() {
                let rent =
                    rpc_client.get_minimum_balance_for_rent_exemption(StakeAccount::LEN)?;
                let user_minimum = rpc_client.get_minimum_balance_for_rent_exemption(0)?;
                let balance = rpc_client.get_balance(&user.pubkey())?;
                instructions.extend(fund_user_instr(
                    &payer.pubkey(),
                    &user.pubkey(),
                    balance,
                    rent,
                    user_minimum,
                ));
            }
            instructions.extend(stake_instr(&config, user.pubkey(), amount)?);
            let signature = sign_and_send(&rpc_client, &payer, &user, &instructions)?;
            println!("{}", signature);
            println!("{}", format!("Successfully staked {} tokens.", amount).green());
            print_events(&rpc_client, &signature, &program_id);
        }
        LasagnaCommands::Withdraw { amount } => {
            let instructions = withdraw_instr(&config, user.pubkey(), amount)?;
            let signature = sign_and_send(&rpc_client, &payer, &user, &instructions)?;
            println!("{}", signature);
            println!("{}", format!("Successfully withdrew {} tokens.", amount).green());
            print_events(&rpc_client, &signature, &program_id);
        }
        LasagnaCommands::Restake {} => {
            let instructions = restake_instr(&config, user.pubkey())?;
            let signature = sign_and_send(&rpc_client, &payer, &user, &instructions)?;
            println!("{}", signature);
            println!("{}", "Successfully restaked tokens.".green());
            print_events(&rpc_client, &signature, &program_id);
        }
        LasagnaCommands::Show { owner, json } => {
            let owner = owner.unwrap_or_else(|| user.pubkey());
            let address = get_stake_account_address(&owner, &program_id);
            match fetch_stake_account(&rpc_client, &address)? {
                Some(account) => {
                    let view = StakeAccountView::new(&address, &account);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        view.print();
                    }
                }
                None => println!("no stake account for {}", owner),
            }
        }
        LasagnaCommands::List { json } => {
            let accounts = fetch_all_stake_accounts(&rpc_client, &program_id)?;
            let views: Vec<StakeAccountView> = accounts
                .iter()
                .map(|(address, account)| StakeAccountView::new(address, account))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for view in &views {
                    view.print();
                }
                println!("{} stake accounts", views.len());
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    run(opts).map_err(|err| {
        if let Some(message) = program_error_message(&err) {
            eprintln!("{}", format!("program error: {}", message).red());
        }
        err
    })
}
