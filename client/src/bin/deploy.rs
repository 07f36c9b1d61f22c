use anyhow::Result;
use clap::Parser;
use colorful::Colorful;
use lasagna_client::{load_cfg, DEFAULT_CONFIG_PATH};
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

/// Prints the deployed Lasagna Finance program id.
#[derive(Debug, Parser)]
#[command(name = "deploy")]
struct Opts {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let config = load_cfg(&opts.config)?;
    let rpc_client = RpcClient::new(config.http_url.to_string());

    println!("Checking Lasagna Finance deployment...");
    println!("Program ID: {}", config.lasagna_program);

    let account = rpc_client
        .get_account_with_commitment(&config.lasagna_program, CommitmentConfig::confirmed())?
        .value;
    match account {
        Some(account) if account.executable => {
            println!("{}", "Program is deployed.".green())
        }
        Some(_) => println!(
            "{}",
            format!("{} is not an executable account", config.lasagna_program).red()
        ),
        None => println!(
            "{}",
            format!("{} is not deployed on {}", config.lasagna_program, config.http_url)
                .yellow()
        ),
    }
    Ok(())
}
