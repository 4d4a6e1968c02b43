//! Encounter setup: the two rosters for one match.

use std::collections::HashSet;

use crate::combatant::{Combatant, Roster, Side, StatBlock};
use crate::dice::{DiceExpr, Die, RandomSource};
use crate::error::{MechError, MechResult};
use crate::weapon::{BASTARD_SWORD, GREAT_CLUB, LIGHT_CROSSBOW, SCIMITAR, SHORT_SPEAR};

/// Hit points rolled for each ogre when the encounter is built.
pub const OGRE_HP: DiceExpr = DiceExpr::SumPlus {
    count: 4,
    die: Die::D8,
    bonus: 11,
};

/// Number of ogres in the standard encounter.
pub const OGRE_COUNT: usize = 4;

/// Addresses one combatant by side and roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatantRef {
    /// The roster the combatant belongs to.
    pub side: Side,
    /// Position within that roster.
    pub index: usize,
}

/// Both rosters of a single match.
#[derive(Debug, Clone)]
pub struct Encounter {
    players: Roster,
    monsters: Roster,
}

impl Encounter {
    /// Build an encounter from two lists of combatants.
    ///
    /// Both sides must be non-empty, carry the right side tag, and every
    /// name must be unique across the whole encounter.
    pub fn new(players: Vec<Combatant>, monsters: Vec<Combatant>) -> MechResult<Self> {
        if players.is_empty() || monsters.is_empty() {
            return Err(MechError::InvalidConfig(
                "both sides need at least one combatant".into(),
            ));
        }
        let mut seen = HashSet::new();
        for c in players.iter().chain(&monsters) {
            if !seen.insert(c.name.as_str()) {
                return Err(MechError::InvalidConfig(format!(
                    "duplicate combatant name: {}",
                    c.name
                )));
            }
        }
        Ok(Self {
            players: Roster::new(Side::Players, players)?,
            monsters: Roster::new(Side::Monsters, monsters)?,
        })
    }

    /// The party against four ogres. Ogre hit points are rolled here, so
    /// every call yields fresh, independent combatants.
    pub fn standard<R: RandomSource + ?Sized>(rng: &mut R) -> MechResult<Self> {
        //                 weapon           I  HP  AC ATK DMG APR
        let party = [
            ("Jimmy", &LIGHT_CROSSBOW, 4, 10, 16, 7, 1, 1),
            ("Erie", &SCIMITAR, 1, 16, 13, 0, 0, 1),
            ("SaucyD", &LIGHT_CROSSBOW, 2, 12, 15, 5, 0, 1),
            ("Sully", &SHORT_SPEAR, 2, 16, 12, 2, 0, 2),
            ("Lance", &BASTARD_SWORD, 1, 28, 15, 6, 2, 1),
        ];
        let players = party
            .into_iter()
            .map(|(name, weapon, init, hp, ac, atk, dmg, apr)| {
                Combatant::new(
                    name,
                    Side::Players,
                    StatBlock {
                        weapon,
                        initiative_mod: init,
                        hp,
                        ac,
                        atk_bonus: atk,
                        dmg_bonus: dmg,
                        attacks_per_round: apr,
                    },
                )
            })
            .collect::<MechResult<Vec<_>>>()?;

        let monsters = (1..=OGRE_COUNT)
            .map(|i| {
                let hp = OGRE_HP.roll(rng)?.total();
                Combatant::new(
                    format!("Ogre {i}"),
                    Side::Monsters,
                    StatBlock {
                        weapon: &GREAT_CLUB,
                        initiative_mod: -1,
                        hp,
                        ac: 16,
                        atk_bonus: 7,
                        dmg_bonus: 0,
                        attacks_per_round: 1,
                    },
                )
            })
            .collect::<MechResult<Vec<_>>>()?;

        Self::new(players, monsters)
    }

    /// The roster for one side.
    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Players => &self.players,
            Side::Monsters => &self.monsters,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Players => &mut self.players,
            Side::Monsters => &mut self.monsters,
        }
    }

    /// Look up a combatant.
    pub fn get(&self, at: CombatantRef) -> MechResult<&Combatant> {
        self.roster(at.side)
            .get(at.index)
            .ok_or_else(|| MechError::InvalidArgument(format!("no {} at index {}", at.side, at.index)))
    }

    /// Look up a combatant mutably.
    pub fn get_mut(&mut self, at: CombatantRef) -> MechResult<&mut Combatant> {
        self.roster_mut(at.side)
            .get_mut(at.index)
            .ok_or_else(|| MechError::InvalidArgument(format!("no {} at index {}", at.side, at.index)))
    }

    /// Every combatant reference: players first, then monsters, in roster order.
    pub fn all_refs(&self) -> Vec<CombatantRef> {
        [Side::Players, Side::Monsters]
            .into_iter()
            .flat_map(|side| {
                (0..self.roster(side).len()).map(move |index| CombatantRef { side, index })
            })
            .collect()
    }

    /// References to the still-active members of one side.
    pub fn active_refs(&self, side: Side) -> Vec<CombatantRef> {
        self.roster(side)
            .active_indices()
            .into_iter()
            .map(|index| CombatantRef { side, index })
            .collect()
    }

    /// Whether each side still has someone standing: `(players, monsters)`.
    pub fn survivors(&self) -> (bool, bool) {
        (self.players.has_active(), self.monsters.has_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grunt(name: &str, side: Side) -> Combatant {
        Combatant::new(
            name,
            side,
            StatBlock {
                weapon: &SCIMITAR,
                initiative_mod: 0,
                hp: 5,
                ac: 10,
                atk_bonus: 0,
                dmg_bonus: 0,
                attacks_per_round: 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn standard_rosters() {
        let mut rng = StdRng::seed_from_u64(42);
        let enc = Encounter::standard(&mut rng).unwrap();
        let players = enc.roster(Side::Players);
        let monsters = enc.roster(Side::Monsters);
        assert_eq!(players.len(), 5);
        assert_eq!(monsters.len(), OGRE_COUNT);
        let double = players
            .members()
            .iter()
            .filter(|p| p.attacks_per_round == 2)
            .count();
        assert_eq!(double, 1);
        assert_eq!(players.get(4).unwrap().name, "Lance");
        assert_eq!(players.get(4).unwrap().hp(), 28);
        for ogre in monsters.members() {
            assert_eq!(ogre.weapon.name, "Great Club");
            assert_eq!(ogre.initiative_mod, -1);
            assert_eq!(ogre.ac, 16);
            assert_eq!(ogre.atk_bonus, 7);
            assert!((OGRE_HP.min()..=OGRE_HP.max()).contains(&ogre.hp()));
        }
    }

    #[test]
    fn ogre_hp_is_rolled_per_ogre() {
        let mut rng = ScriptedSource::new(vec![
            1, 1, 1, 1, // 15
            8, 8, 8, 8, // 43
            2, 2, 2, 2, // 19
            3, 4, 5, 6, // 29
        ]);
        let enc = Encounter::standard(&mut rng).unwrap();
        let hps: Vec<i32> = enc
            .roster(Side::Monsters)
            .members()
            .iter()
            .map(|m| m.hp())
            .collect();
        assert_eq!(hps, vec![15, 43, 19, 29]);
        assert_eq!(rng.consumed(), 16);
    }

    #[test]
    fn setup_creates_independent_encounters() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut first = Encounter::standard(&mut rng).unwrap();
        let second = Encounter::standard(&mut rng).unwrap();
        let jimmy = CombatantRef {
            side: Side::Players,
            index: 0,
        };
        first.get_mut(jimmy).unwrap().take_damage(100);
        assert!(!first.get(jimmy).unwrap().is_active());
        assert!(second.get(jimmy).unwrap().is_active());
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Encounter::new(
            vec![grunt("Twin", Side::Players)],
            vec![grunt("Twin", Side::Monsters)],
        );
        assert!(matches!(result, Err(MechError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_side() {
        assert!(Encounter::new(vec![grunt("A", Side::Players)], Vec::new()).is_err());
    }

    #[test]
    fn refs_and_survivors() {
        let mut enc = Encounter::new(
            vec![grunt("A", Side::Players), grunt("B", Side::Players)],
            vec![grunt("C", Side::Monsters)],
        )
        .unwrap();
        assert_eq!(enc.all_refs().len(), 3);
        assert_eq!(enc.all_refs()[2].side, Side::Monsters);
        assert_eq!(enc.survivors(), (true, true));

        let c = CombatantRef {
            side: Side::Monsters,
            index: 0,
        };
        enc.get_mut(c).unwrap().take_damage(5);
        assert!(enc.active_refs(Side::Monsters).is_empty());
        assert_eq!(enc.survivors(), (true, false));
        assert!(
            enc.get(CombatantRef {
                side: Side::Monsters,
                index: 9
            })
            .is_err()
        );
    }
}
