//! Attack resolution.

use serde::Serialize;

use crate::combatant::Combatant;
use crate::dice::{Die, RandomSource, RollResult};
use crate::encounter::CombatantRef;
use crate::error::MechResult;
use crate::weapon::Weapon;

/// How a single attack landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    /// Nothing is queued.
    Miss,
    /// Base damage is queued.
    Hit,
    /// Base damage times the weapon's multiplier is queued.
    Critical,
}

impl AttackOutcome {
    /// Classify a natural d20. A critical threat always connects, regardless
    /// of the target's armor class.
    pub fn classify(weapon: &Weapon, natural: u32, atk_bonus: i32, target_ac: i32) -> Self {
        if weapon.is_critical(natural) {
            Self::Critical
        } else if natural as i32 + atk_bonus >= target_ac {
            Self::Hit
        } else {
            Self::Miss
        }
    }
}

impl std::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Miss => write!(f, "miss"),
            Self::Hit => write!(f, "hit"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Damage waiting to be applied at the end of an initiative tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDamage {
    /// Who takes the damage.
    pub target: CombatantRef,
    /// How much.
    pub amount: i32,
}

/// Everything rolled for one attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackResolution {
    /// The natural d20.
    pub natural: u32,
    /// The weapon's damage dice.
    pub damage_roll: RollResult,
    /// Weapon damage plus the attacker's damage bonus.
    pub base_damage: i32,
    /// Miss, hit, or critical.
    pub outcome: AttackOutcome,
}

impl AttackResolution {
    /// The amount to queue against the target, if any.
    pub fn queued_damage(&self, weapon: &Weapon) -> Option<i32> {
        match self.outcome {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit => Some(self.base_damage),
            AttackOutcome::Critical => Some(self.base_damage * weapon.crit_mult as i32),
        }
    }
}

/// Roll to hit and roll damage for one attack.
///
/// Damage is drawn on every attack, misses included, so a seeded source
/// consumes the same number of values regardless of outcome.
pub fn resolve_attack<R: RandomSource + ?Sized>(
    attacker: &Combatant,
    target: &Combatant,
    rng: &mut R,
) -> MechResult<AttackResolution> {
    let natural = Die::D20.roll(rng)?;
    let damage_roll = attacker.weapon.roll_damage(rng)?;
    let base_damage = damage_roll.total() + attacker.dmg_bonus;
    let outcome = AttackOutcome::classify(attacker.weapon, natural, attacker.atk_bonus, target.ac);
    Ok(AttackResolution {
        natural,
        damage_roll,
        base_damage,
        outcome,
    })
}
