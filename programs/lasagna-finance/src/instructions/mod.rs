pub mod stake;
pub use stake::*;

pub mod withdraw;
pub use withdraw::*;

pub mod restake;
pub use restake::*;
