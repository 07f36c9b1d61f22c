pub mod events;
pub use events::*;

pub mod stake_account;
pub use stake_account::*;
