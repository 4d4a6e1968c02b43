//! Combatants, their side tag, and the roster each side fields.

use crate::error::{MechError, MechResult};
use crate::weapon::Weapon;

/// Which side of the skirmish a combatant fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The adventuring party.
    Players,
    /// The ogres.
    Monsters,
}

impl Side {
    /// The side this one attacks.
    pub fn opponent(self) -> Self {
        match self {
            Self::Players => Self::Monsters,
            Self::Monsters => Self::Players,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Players => write!(f, "players"),
            Self::Monsters => write!(f, "monsters"),
        }
    }
}

/// Starting attributes for a combatant.
#[derive(Debug, Clone, Copy)]
pub struct StatBlock {
    /// The weapon used for every attack.
    pub weapon: &'static Weapon,
    /// Added to the d10 initiative roll each round.
    pub initiative_mod: i32,
    /// Starting hit points.
    pub hp: i32,
    /// Armor class attackers must meet or beat.
    pub ac: i32,
    /// Added to the natural d20 for non-critical hits.
    pub atk_bonus: i32,
    /// Added to each rolled weapon damage.
    pub dmg_bonus: i32,
    /// Attacks made per turn while active.
    pub attacks_per_round: u32,
}

/// One participant in the skirmish.
#[derive(Debug, Clone)]
pub struct Combatant {
    /// Display name, unique within a match.
    pub name: String,
    /// The side this combatant belongs to.
    pub side: Side,
    /// The weapon used for every attack.
    pub weapon: &'static Weapon,
    /// Added to the d10 initiative roll each round.
    pub initiative_mod: i32,
    /// Armor class.
    pub ac: i32,
    /// Attack bonus.
    pub atk_bonus: i32,
    /// Damage bonus.
    pub dmg_bonus: i32,
    /// Attacks made per turn while active.
    pub attacks_per_round: u32,
    starting_hp: i32,
    hp: i32,
}

impl Combatant {
    /// Create a combatant, rejecting stat blocks the engine cannot run.
    pub fn new(name: impl Into<String>, side: Side, stats: StatBlock) -> MechResult<Self> {
        let name = name.into();
        stats
            .weapon
            .validate()
            .map_err(|e| MechError::InvalidConfig(format!("{name}: {e}")))?;
        if stats.attacks_per_round < 1 {
            return Err(MechError::InvalidConfig(format!(
                "{name}: attacks per round must be at least 1"
            )));
        }
        let weakest_hit = i64::from(stats.weapon.damage.min()) + i64::from(stats.dmg_bonus);
        if weakest_hit < 0 {
            return Err(MechError::InvalidConfig(format!(
                "{name}: damage bonus {} lets a hit with {} heal the target",
                stats.dmg_bonus, stats.weapon.damage
            )));
        }
        if stats.hp <= 0 {
            return Err(MechError::InvalidConfig(format!(
                "{name}: starting hp must be positive, got {}",
                stats.hp
            )));
        }
        Ok(Self {
            name,
            side,
            weapon: stats.weapon,
            initiative_mod: stats.initiative_mod,
            ac: stats.ac,
            atk_bonus: stats.atk_bonus,
            dmg_bonus: stats.dmg_bonus,
            attacks_per_round: stats.attacks_per_round,
            starting_hp: stats.hp,
            hp: stats.hp,
        })
    }

    /// Current hit points. May be arbitrarily negative.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Hit points at creation.
    pub fn starting_hp(&self) -> i32 {
        self.starting_hp
    }

    /// A combatant acts and can be targeted only while its hp is positive.
    pub fn is_active(&self) -> bool {
        self.hp > 0
    }

    /// Subtract damage with no floor. Returns true if this blow took the
    /// combatant from active to inactive.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_active = self.is_active();
        self.hp -= amount;
        was_active && !self.is_active()
    }
}

/// The fixed, ordered membership of one side.
#[derive(Debug, Clone)]
pub struct Roster {
    side: Side,
    members: Vec<Combatant>,
}

impl Roster {
    /// Build a roster, checking every member carries this roster's side tag.
    pub fn new(side: Side, members: Vec<Combatant>) -> MechResult<Self> {
        if let Some(stray) = members.iter().find(|m| m.side != side) {
            return Err(MechError::InvalidConfig(format!(
                "{} is tagged {} but placed in the {side} roster",
                stray.name, stray.side
            )));
        }
        Ok(Self { side, members })
    }

    /// The side this roster fights for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of members, active or not.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in roster order.
    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    /// Get a member by position.
    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    /// Get a mutable member by position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.members.get_mut(index)
    }

    /// Positions of members that are still active.
    pub fn active_indices(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_active())
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns true while at least one member is active.
    pub fn has_active(&self) -> bool {
        self.members.iter().any(Combatant::is_active)
    }
}
