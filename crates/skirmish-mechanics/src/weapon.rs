//! The fixed weapon catalog.

use crate::dice::{DiceExpr, Die, RandomSource, RollResult};
use crate::error::{MechError, MechResult};

/// A weapon shared by reference between everyone who wields it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weapon {
    /// Display name.
    pub name: &'static str,
    /// Damage rolled on a hit, before the wielder's damage bonus.
    pub damage: DiceExpr,
    /// Lowest natural d20 that counts as a critical hit.
    pub crit_min: u32,
    /// Damage multiplier applied on a critical hit.
    pub crit_mult: u32,
}

/// Light crossbow: d8, critical on 19-20, x2.
pub const LIGHT_CROSSBOW: Weapon = Weapon {
    name: "Light Crossbow",
    damage: DiceExpr::Single(Die::D8),
    crit_min: 19,
    crit_mult: 2,
};

/// Scimitar: d6, critical on 18-20, x2.
pub const SCIMITAR: Weapon = Weapon {
    name: "Scimitar",
    damage: DiceExpr::Single(Die::D6),
    crit_min: 18,
    crit_mult: 2,
};

/// Short spear: d6, critical on 20, x2.
pub const SHORT_SPEAR: Weapon = Weapon {
    name: "Short Spear",
    damage: DiceExpr::Single(Die::D6),
    crit_min: 20,
    crit_mult: 2,
};

/// Bastard sword: d10, critical on 19-20, x2.
pub const BASTARD_SWORD: Weapon = Weapon {
    name: "Bastard Sword",
    damage: DiceExpr::Single(Die::D10),
    crit_min: 19,
    crit_mult: 2,
};

/// Two-handed great club: 4d8+7, critical on 20, x2.
pub const GREAT_CLUB: Weapon = Weapon {
    name: "Great Club",
    damage: DiceExpr::SumPlus {
        count: 4,
        die: Die::D8,
        bonus: 7,
    },
    crit_min: 20,
    crit_mult: 2,
};

/// Every weapon in the catalog.
pub const CATALOG: [&Weapon; 5] = [
    &LIGHT_CROSSBOW,
    &SCIMITAR,
    &SHORT_SPEAR,
    &BASTARD_SWORD,
    &GREAT_CLUB,
];

impl Weapon {
    /// Check the critical range, multiplier, and damage formula.
    pub fn validate(&self) -> MechResult<()> {
        if !(1..=20).contains(&self.crit_min) {
            return Err(MechError::InvalidConfig(format!(
                "{}: critical threshold {} is outside 1-20",
                self.name, self.crit_min
            )));
        }
        if self.crit_mult < 1 {
            return Err(MechError::InvalidConfig(format!(
                "{}: critical multiplier must be at least 1",
                self.name
            )));
        }
        self.damage.validate()
    }

    /// Whether a natural d20 roll threatens a critical hit.
    pub fn is_critical(&self, natural: u32) -> bool {
        natural >= self.crit_min
    }

    /// Roll this weapon's damage dice.
    pub fn roll_damage<R: RandomSource + ?Sized>(&self, rng: &mut R) -> MechResult<RollResult> {
        self.damage.roll(rng)
    }
}
