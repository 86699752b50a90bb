//! Reports - filtered, formatted text extracted from players and registers

pub mod gamertag;
pub mod email;

pub use gamertag::roster_gamertag_report;
pub use email::register_mutate_and_email_report;
