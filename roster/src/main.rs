//! Roster Demo
//!
//! Builds a small register and player list, then logs both reports.

use roster::{register_mutate_and_email_report, roster_gamertag_report, Name, Player, Register};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Number used for generated gamertags and the gamertag report
const TAG_NUMBER: i32 = 15;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Roster demo starting...");

    let mut register = Register::new();
    register.add_names(vec![
        Name::new("Sarah", "Ball"),
        Name::new("Tom", "Hill"),
        Name::new("Peter", "Jones"),
        Name::new("Ann", "Cox"),
    ]);
    register.sort_register();
    info!("{}", register);

    let mut players = Vec::new();
    for raw in ["sarah ball", "tom hill", "peter jones"] {
        let mut player = Player::default();
        player.set_full_player_name(raw)?;
        player.generate_gamertag(TAG_NUMBER);
        player.roll_dice();
        players.push(player);
    }
    // Hand-picked tag that keeps the family name readable
    players[1].set_gamertag(format!("hilltop{TAG_NUMBER}"));
    players.sort_by(Player::compare_to);

    for player in &players {
        info!("{}", player);
    }

    info!(
        "Gamertag report:\n{}",
        roster_gamertag_report(&players, TAG_NUMBER)
    );

    let emails = register_mutate_and_email_report(Name::new("Eve", "Adams"), &mut register)?;
    info!("Email report:\n{}", emails);
    info!("Register snapshot: {}", register.export_json()?);

    Ok(())
}
