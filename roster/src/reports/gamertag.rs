//! Gamertag Report
//!
//! Lists players whose gamertag carries both their family name and a number.

use tracing::debug;

use crate::player::Player;

/// One `"FIRST, family\n"` line per player, in input order, whose gamertag
/// contains their family name (ignoring case) and the digits of `number`.
pub fn roster_gamertag_report(players: &[Player], number: i32) -> String {
    let digits = number.to_string();
    let mut report = String::new();
    let mut matched = 0usize;

    for player in players {
        let name = player.name();
        let family_lower = name.family_name().to_lowercase();
        let tag = player.gamertag();

        if tag.to_lowercase().contains(&family_lower) && tag.contains(&digits) {
            report.push_str(&format!(
                "{}, {}\n",
                name.first_name().to_uppercase(),
                family_lower
            ));
            matched += 1;
        }
    }

    debug!(players = players.len(), matched, number, "gamertag report built");
    report
}
