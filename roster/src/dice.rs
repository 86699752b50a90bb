//! Dice - the rollable capability a player carries

use rand::Rng;
use std::fmt;

/// Number of faces on a standard die
const DIE_FACES: i32 = 6;

/// Anything that can be rolled and then report a score
pub trait Rollable: fmt::Debug {
    /// Advance to a new outcome
    fn roll(&mut self);

    /// Score of the current outcome
    fn score(&self) -> i32;
}

/// A single six-sided die. Shows 1 until first rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    face: i32,
}

impl Die {
    pub fn new() -> Self {
        Self { face: 1 }
    }

    pub fn face(&self) -> i32 {
        self.face
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Rollable for Die {
    fn roll(&mut self) {
        let mut rng = rand::thread_rng();
        self.face = rng.gen_range(1..=DIE_FACES);
    }

    fn score(&self) -> i32 {
        self.face
    }
}

/// Two dice rolled together, scored as their sum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairOfDice {
    first: Die,
    second: Die,
}

impl PairOfDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dice(&self) -> (Die, Die) {
        (self.first, self.second)
    }
}

impl Rollable for PairOfDice {
    fn roll(&mut self) {
        self.first.roll();
        self.second.roll();
    }

    fn score(&self) -> i32 {
        self.first.score() + self.second.score()
    }
}

impl fmt::Display for PairOfDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first.face, self.second.face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_stays_in_range() {
        let mut die = Die::new();
        assert_eq!(die.score(), 1);
        for _ in 0..200 {
            die.roll();
            assert!((1..=DIE_FACES).contains(&die.score()));
        }
    }

    #[test]
    fn test_pair_scores_sum() {
        let mut pair = PairOfDice::new();
        assert_eq!(pair.score(), 2);
        for _ in 0..200 {
            pair.roll();
            let (a, b) = pair.dice();
            assert_eq!(pair.score(), a.face() + b.face());
            assert!((2..=2 * DIE_FACES).contains(&pair.score()));
        }
    }
}
