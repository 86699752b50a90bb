//! Roster Engine
//!
//! Named players held in a capacity-bounded register, with gamertags and
//! email-style addresses derived by fixed string rules.

pub mod error;
pub mod name;
pub mod dice;
pub mod player;
pub mod register;
pub mod reports;

pub use error::RosterError;
pub use name::Name;
pub use dice::{Die, PairOfDice, Rollable};
pub use player::Player;
pub use register::Register;
pub use reports::{register_mutate_and_email_report, roster_gamertag_report};
