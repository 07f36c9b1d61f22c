use anyhow::{format_err, Result};
use configparser::ini::Ini;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::str::FromStr;

pub mod instructions;

pub const DEFAULT_CONFIG_PATH: &str = "client_config.ini";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub http_url: String,
    pub ws_url: String,
    pub payer_path: String,
    pub lasagna_program: Pubkey,
}

pub fn load_cfg(client_config: &str) -> Result<ClientConfig> {
    let mut config = Ini::new();
    config
        .load(client_config)
        .map_err(|e| format_err!("failed to load {}: {}", client_config, e))?;
    parse_cfg(&config)
}

pub fn load_cfg_from_str(contents: &str) -> Result<ClientConfig> {
    let mut config = Ini::new();
    config
        .read(contents.to_string())
        .map_err(|e| format_err!("failed to parse config: {}", e))?;
    parse_cfg(&config)
}

fn parse_cfg(config: &Ini) -> Result<ClientConfig> {
    let http_url = required(config, "http_url")?;
    let ws_url = required(config, "ws_url")?;
    let payer_path = required(config, "payer_path")?;
    let lasagna_program_str = required(config, "lasagna_program")?;
    let lasagna_program = Pubkey::from_str(&lasagna_program_str)
        .map_err(|e| format_err!("invalid lasagna_program {}: {}", lasagna_program_str, e))?;

    Ok(ClientConfig {
        http_url,
        ws_url,
        payer_path,
        lasagna_program,
    })
}

fn required(config: &Ini, key: &str) -> Result<String> {
    match config.get("Global", key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format_err!("{} must not be empty", key)),
    }
}

pub fn read_keypair_file(s: &str) -> Result<Keypair> {
    solana_sdk::signature::read_keypair_file(s)
        .map_err(|_| format_err!("failed to read keypair from {}", s))
}

/// Loads the user keypair from `path`, or generates a throwaway one.
///
/// Generated keypairs are never written to disk.
pub fn user_keypair(path: Option<&str>) -> Result<Keypair> {
    match path {
        Some(path) => read_keypair_file(path),
        None => {
            let user = Keypair::new();
            println!("generated ephemeral user {}", user.pubkey());
            Ok(user)
        }
    }
}
