//! Dice types, compound damage formulas, and rolling.
//!
//! Every draw goes through a [`RandomSource`], so a seeded `StdRng` or a
//! [`ScriptedSource`] fully determines a match.

pub mod roll;
pub mod source;

pub use roll::{DieResult, RollResult};
pub use source::{RandomSource, ScriptedSource};

use serde::Serialize;

use crate::error::{MechError, MechResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Roll this die once.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> MechResult<u32> {
        roll_die(rng, self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Roll a uniform integer in `[1, sides]`.
pub fn roll_die<R: RandomSource + ?Sized>(rng: &mut R, sides: u32) -> MechResult<u32> {
    if sides < 1 {
        return Err(MechError::InvalidArgument(format!(
            "cannot roll a die with {sides} sides"
        )));
    }
    let high = i32::try_from(sides)
        .map_err(|_| MechError::InvalidArgument(format!("die with {sides} sides is too large")))?;
    let value = rng.uniform_int(1, high);
    // Sources clamp into range, so the value is always positive.
    Ok(value.max(1) as u32)
}

/// A damage or hit-point formula built from independent die rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceExpr {
    /// A single die, e.g. `d8`.
    Single(Die),
    /// The sum of several identical dice, e.g. `2d6`.
    Sum {
        /// How many dice are rolled.
        count: u32,
        /// The die type.
        die: Die,
    },
    /// The sum of several identical dice plus a constant, e.g. `4d8+7`.
    SumPlus {
        /// How many dice are rolled.
        count: u32,
        /// The die type.
        die: Die,
        /// Flat amount added to the dice total.
        bonus: i32,
    },
}

impl DiceExpr {
    fn parts(self) -> (u32, Die, i32) {
        match self {
            Self::Single(die) => (1, die, 0),
            Self::Sum { count, die } => (count, die, 0),
            Self::SumPlus { count, die, bonus } => (count, die, bonus),
        }
    }

    fn bounds(self) -> (i64, i64) {
        let (count, die, bonus) = self.parts();
        let count = i64::from(count);
        let bonus = i64::from(bonus);
        (
            count.saturating_add(bonus),
            count
                .saturating_mul(i64::from(die.sides()))
                .saturating_add(bonus),
        )
    }

    /// Check that the formula rolls at least one die with at least one side,
    /// and that every possible total fits in an `i32`.
    pub fn validate(self) -> MechResult<()> {
        let (count, die, _) = self.parts();
        if count == 0 {
            return Err(MechError::InvalidConfig(format!("{self} rolls no dice")));
        }
        if die.sides() == 0 {
            return Err(MechError::InvalidConfig(format!("{self} uses a die with no sides")));
        }
        let (low, high) = self.bounds();
        if low < i64::from(i32::MIN) || high > i64::from(i32::MAX) {
            return Err(MechError::InvalidConfig(format!("{self} can total more than fits in an i32")));
        }
        Ok(())
    }

    /// Smallest possible total, saturating at the `i32` range.
    pub fn min(self) -> i32 {
        saturate(self.bounds().0)
    }

    /// Largest possible total, saturating at the `i32` range.
    pub fn max(self) -> i32 {
        saturate(self.bounds().1)
    }

    /// Roll every die in the formula, in order, and keep the individual values.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> MechResult<RollResult> {
        let (count, die, bonus) = self.parts();
        let dice = (0..count)
            .map(|_| die.roll(rng).map(|value| DieResult { die, value }))
            .collect::<MechResult<Vec<_>>>()?;
        Ok(RollResult {
            dice,
            modifier: bonus,
        })
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(die) => write!(f, "{die}"),
            Self::Sum { count, die } => write!(f, "{count}{die}"),
            Self::SumPlus { count, die, bonus } if *bonus < 0 => {
                write!(f, "{count}{die}{bonus}")
            }
            Self::SumPlus { count, die, bonus } => write!(f, "{count}{die}+{bonus}"),
        }
    }
}
