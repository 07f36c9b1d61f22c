use anchor_lang::{AnchorDeserialize, Discriminator};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use lasagna_finance::states::{Restaked, Staked, Withdrawn};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

const PROGRAM_LOG_DATA: &str = "Program data: ";

#[derive(Debug)]
pub enum StakeEvent {
    Staked(Staked),
    Withdrawn(Withdrawn),
    Restaked(Restaked),
}

impl fmt::Display for StakeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakeEvent::Staked(e) => write!(
                f,
                "Staked {{ owner: {}, amount: {}, total_staked: {}, timestamp: {} }}",
                e.owner, e.amount, e.total_staked, e.timestamp
            ),
            StakeEvent::Withdrawn(e) => write!(
                f,
                "Withdrawn {{ owner: {}, amount: {}, remaining: {}, timestamp: {} }}",
                e.owner, e.amount, e.remaining, e.timestamp
            ),
            StakeEvent::Restaked(e) => write!(
                f,
                "Restaked {{ owner: {}, amount: {}, timestamp: {} }}",
                e.owner, e.amount, e.timestamp
            ),
        }
    }
}

fn decode_event(data: &[u8]) -> Option<StakeEvent> {
    if let Some(payload) = data.strip_prefix(&Staked::DISCRIMINATOR[..]) {
        return Staked::try_from_slice(payload).ok().map(StakeEvent::Staked);
    }
    if let Some(payload) = data.strip_prefix(&Withdrawn::DISCRIMINATOR[..]) {
        return Withdrawn::try_from_slice(payload)
            .ok()
            .map(StakeEvent::Withdrawn);
    }
    if let Some(payload) = data.strip_prefix(&Restaked::DISCRIMINATOR[..]) {
        return Restaked::try_from_slice(payload)
            .ok()
            .map(StakeEvent::Restaked);
    }
    None
}

/// Decodes the events emitted by `program_id` from transaction logs.
///
/// Only `Program data:` lines logged while `program_id` is the innermost
/// invoked program are considered.
pub fn parse_program_events(logs: &[String], program_id: &Pubkey) -> Vec<StakeEvent> {
    let program = program_id.to_string();
    let invoke_prefix = format!("Program {} invoke", program);
    let mut stack: Vec<bool> = Vec::new();
    let mut events = Vec::new();

    for line in logs {
        if line.starts_with("Program log: ") {
            continue;
        }
        if let Some(data) = line.strip_prefix(PROGRAM_LOG_DATA) {
            if stack.last() == Some(&true) {
                if let Some(event) = STANDARD.decode(data).ok().and_then(|d| decode_event(&d)) {
                    events.push(event);
                }
            }
        } else if line.starts_with("Program ") && line.contains(" invoke [") {
            stack.push(line.starts_with(&invoke_prefix));
        } else if line.starts_with("Program ")
            && (line.ends_with(" success") || line.contains(" failed"))
        {
            stack.pop();
        }
    }
    events
}
