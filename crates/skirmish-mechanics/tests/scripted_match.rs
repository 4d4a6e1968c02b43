//! A full match replayed from a fixed sequence of draws and checked against
//! a hand-computed trace.

use skirmish_mechanics::combat::AttackOutcome;
use skirmish_mechanics::report::{InitiativeEntry, TierSummary};
use skirmish_mechanics::weapon::{GREAT_CLUB, SCIMITAR, SHORT_SPEAR};
use skirmish_mechanics::{
    CombatEvent, Combatant, Encounter, EventLog, MatchState, ScriptedSource, Side, StatBlock,
    run_match,
};

fn encounter() -> Encounter {
    let ayla = Combatant::new(
        "Ayla",
        Side::Players,
        StatBlock {
            weapon: &SCIMITAR,
            initiative_mod: 0,
            hp: 10,
            ac: 12,
            atk_bonus: 3,
            dmg_bonus: 1,
            attacks_per_round: 1,
        },
    )
    .unwrap();
    let brom = Combatant::new(
        "Brom",
        Side::Players,
        StatBlock {
            weapon: &SHORT_SPEAR,
            initiative_mod: 2,
            hp: 6,
            ac: 10,
            atk_bonus: 2,
            dmg_bonus: 0,
            attacks_per_round: 2,
        },
    )
    .unwrap();
    let ogre = Combatant::new(
        "Ogre",
        Side::Monsters,
        StatBlock {
            weapon: &GREAT_CLUB,
            initiative_mod: -1,
            hp: 20,
            ac: 14,
            atk_bonus: 5,
            dmg_bonus: 0,
            attacks_per_round: 1,
        },
    )
    .unwrap();
    Encounter::new(vec![ayla, brom], vec![ogre]).unwrap()
}

// Draw order: initiative for Ayla, Brom, Ogre; then per attack the target
// index, the natural d20, and the weapon damage dice.
fn script() -> ScriptedSource {
    ScriptedSource::new(vec![
        // Round 1: everyone on 5.
        5, 3, 6, //
        0, 18, 3, // Ayla crits the ogre: (3 + 1) x 2 = 8
        0, 5, 6, // Brom misses: 5 + 2 vs 14
        0, 20, 2, // Brom crits: 2 x 2 = 4
        1, 19, 8, 8, 8, 8, // Ogre hits Brom: 32 + 7 = 39
        // Round 2: Brom 12, Ayla 2, Ogre 0.
        2, 10, 1, //
        0, 1, 1, // Ayla misses
        0, 2, 1, 1, 1, 1, // Ogre misses
        // Round 3: Ayla and Ogre on 9, Brom 3.
        9, 1, 10, //
        0, 18, 4, // Ayla crits: (4 + 1) x 2 = 10
        0, 20, 2, 2, 2, 2, // Ogre crits: (8 + 7) x 2 = 30
    ])
}

fn tier(total: i32, members: &[(&str, i32)]) -> TierSummary {
    TierSummary {
        total,
        members: members
            .iter()
            .map(|&(name, hp)| InitiativeEntry {
                name: name.to_string(),
                hp,
            })
            .collect(),
    }
}

#[test]
fn scripted_match_ends_in_mutual_wipe() {
    let mut enc = encounter();
    let mut rng = script();
    let mut log = EventLog::new();

    let outcome = run_match(&mut enc, &mut rng, &mut log).unwrap();

    assert_eq!(outcome.rounds, 3);
    assert_eq!(outcome.state(), MatchState::MutualWipe);
    assert!(rng.is_exhausted());
    assert_eq!(rng.consumed(), 42);

    let hps: Vec<i32> = [Side::Players, Side::Monsters]
        .iter()
        .flat_map(|&side| enc.roster(side).members().iter().map(|c| c.hp()))
        .collect();
    assert_eq!(hps, vec![-20, -33, -2]);
}

#[test]
fn scripted_match_initiative_order() {
    let mut enc = encounter();
    let mut log = EventLog::new();
    run_match(&mut enc, &mut script(), &mut log).unwrap();

    let orders: Vec<&Vec<TierSummary>> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            CombatEvent::InitiativeOrder { tiers } => Some(tiers),
            _ => None,
        })
        .collect();
    assert_eq!(orders.len(), 3);
    assert_eq!(
        *orders[0],
        vec![tier(5, &[("Ayla", 10), ("Brom", 6), ("Ogre", 20)])]
    );
    assert_eq!(
        *orders[1],
        vec![
            tier(12, &[("Brom", -33)]),
            tier(2, &[("Ayla", 10)]),
            tier(0, &[("Ogre", 8)]),
        ]
    );
    assert_eq!(
        *orders[2],
        vec![
            tier(9, &[("Ayla", 10), ("Ogre", 8)]),
            tier(3, &[("Brom", -33)])
        ]
    );
}

#[test]
fn scripted_match_attacks_and_damage() {
    let mut enc = encounter();
    let mut log = EventLog::new();
    run_match(&mut enc, &mut script(), &mut log).unwrap();

    let outcomes: Vec<(String, String, AttackOutcome)> = log
        .attacks()
        .into_iter()
        .filter_map(|e| match e {
            CombatEvent::Attack {
                attacker,
                target,
                outcome,
                ..
            } => Some((attacker.clone(), target.clone(), *outcome)),
            _ => None,
        })
        .collect();
    let expected = [
        ("Ayla", "Ogre", AttackOutcome::Critical),
        ("Brom", "Ogre", AttackOutcome::Miss),
        ("Brom", "Ogre", AttackOutcome::Critical),
        ("Ogre", "Brom", AttackOutcome::Hit),
        ("Ayla", "Ogre", AttackOutcome::Miss),
        ("Ogre", "Ayla", AttackOutcome::Miss),
        ("Ayla", "Ogre", AttackOutcome::Critical),
        ("Ogre", "Ayla", AttackOutcome::Critical),
    ];
    assert_eq!(outcomes.len(), expected.len());
    for (got, want) in outcomes.iter().zip(expected) {
        assert_eq!((got.0.as_str(), got.1.as_str(), got.2), want);
    }

    let damage: Vec<(String, i32, i32)> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            CombatEvent::DamageTaken { target, amount, hp } => {
                Some((target.clone(), *amount, *hp))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        damage,
        vec![
            ("Ogre".to_string(), 8, 12),
            ("Ogre".to_string(), 4, 8),
            ("Brom".to_string(), 39, -33),
            ("Ogre".to_string(), 10, -2),
            ("Ayla".to_string(), 30, -20),
        ]
    );
    assert_eq!(log.deaths(), vec!["Brom", "Ogre", "Ayla"]);
}

#[test]
fn scripted_match_narrative() {
    let mut enc = encounter();
    let mut log = EventLog::new();
    run_match(&mut enc, &mut script(), &mut log).unwrap();
    let text = log.render();

    assert!(text.starts_with("=== ROUND 1 ===\nInitiative order:\n    5: Ayla (10), Brom (6), Ogre (20)\n"));
    assert!(text.contains(
        "Ayla attacks Ogre with their Scimitar (18 + 3 vs 14) and scores a CRITICAL HIT! (4x2)"
    ));
    assert!(text.contains(
        "Ayla attacks Ogre with their Scimitar (18 + 3 vs 14) and scores a CRITICAL HIT! (4x2) Damage dice: [3] = 3."
    ));
    assert!(text.contains(
        "Ogre attacks Brom with their Great Club (19 + 5 vs 10) and scores a hit! Damage dice: [8, 8, 8, 8] + 7 = 39."
    ));
    assert!(text.contains("Brom attacks Ogre with their Short Spear (5 + 2 vs 14) and misses."));
    assert!(text.contains("Brom takes 39 damage and is now at -33 HP.\nBrom has died."));
    assert!(text.contains("Brom is down for the count."));
    assert!(text.ends_with(
        "Combat ended after 3 rounds.\nPlayers are ALL DEAD.\nMonsters have all died."
    ));
}
