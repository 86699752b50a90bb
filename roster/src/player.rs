//! Player - a name, a gamertag and a set of dice
//!
//! Gamertags are derived from the full name: whitespace stripped, lowercased,
//! reversed, then suffixed with a number in `GAMERTAG_MIN..=GAMERTAG_MAX`.

use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use crate::dice::{PairOfDice, Rollable};
use crate::error::RosterError;
use crate::name::Name;

/// Smallest number accepted by `generate_gamertag`
pub const GAMERTAG_MIN: i32 = 1;

/// Largest number accepted by `generate_gamertag`
pub const GAMERTAG_MAX: i32 = 100;

#[derive(Debug)]
pub struct Player {
    name: Name,
    gamertag: String,
    dice: Box<dyn Rollable>,
}

impl Player {
    /// Player with the default pair of dice
    pub fn new(name: Name, gamertag: impl Into<String>) -> Self {
        Self::with_dice(name, gamertag, Box::new(PairOfDice::new()))
    }

    pub fn with_dice(name: Name, gamertag: impl Into<String>, dice: Box<dyn Rollable>) -> Self {
        Self {
            name,
            gamertag: gamertag.into(),
            dice,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut Name {
        &mut self.name
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn gamertag(&self) -> &str {
        &self.gamertag
    }

    pub fn set_gamertag(&mut self, gamertag: impl Into<String>) {
        self.gamertag = gamertag.into();
    }

    pub fn rollable(&self) -> &dyn Rollable {
        self.dice.as_ref()
    }

    pub fn roll_dice(&mut self) {
        self.dice.roll();
    }

    pub fn dice_score(&self) -> i32 {
        self.dice.score()
    }

    /// Parse `"first family"` into the name, capitalising each part.
    ///
    /// Splits once, at the first space; everything after it (further spaces
    /// included) becomes the family name. Leaves the name untouched on error.
    pub fn set_full_player_name(&mut self, raw: &str) -> Result<(), RosterError> {
        let (first, family) = raw
            .split_once(' ')
            .ok_or_else(|| RosterError::MissingNameSeparator(raw.to_string()))?;

        let first = capitalise(first).ok_or_else(|| RosterError::EmptyNamePart(raw.to_string()))?;
        let family = capitalise(family).ok_or_else(|| RosterError::EmptyNamePart(raw.to_string()))?;

        debug!(first = %first, family = %family, "player name parsed");
        self.name.set_first_name(first);
        self.name.set_family_name(family);
        Ok(())
    }

    /// Replace the gamertag with the reversed, compacted full name plus `i`.
    /// Does nothing when `i` is outside `GAMERTAG_MIN..=GAMERTAG_MAX`.
    pub fn generate_gamertag(&mut self, i: i32) {
        if !(GAMERTAG_MIN..=GAMERTAG_MAX).contains(&i) {
            return;
        }

        let compact: String = self
            .name
            .full_name()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let reversed: String = compact.chars().rev().collect();

        self.gamertag = format!("{reversed}{i}");
        debug!(gamertag = %self.gamertag, "gamertag generated");
    }

    /// Order by name, then by gamertag. Usable directly with `sort_by`.
    pub fn compare_to(&self, other: &Player) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.gamertag.cmp(&other.gamertag))
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Name::default(), "")
    }
}

impl Rollable for Player {
    fn roll(&mut self) {
        self.roll_dice();
    }

    fn score(&self) -> i32 {
        self.dice_score()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player:[name={}, gamertag={}, score={}]",
            self.name,
            self.gamertag,
            self.dice.score()
        )
    }
}

/// Uppercase the first character and lowercase the rest; `None` if empty
fn capitalise(part: &str) -> Option<String> {
    let mut chars = part.chars();
    let head = chars.next()?;
    let mut out: String = head.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    Some(out)
}
