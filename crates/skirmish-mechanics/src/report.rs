//! Narrative events emitted while a match runs, and sinks that receive them.

use serde::Serialize;

use crate::combat::AttackOutcome;
use crate::dice::RollResult;

/// One combatant's line in the initiative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiativeEntry {
    /// Combatant name.
    pub name: String,
    /// Hit points at the start of the round.
    pub hp: i32,
}

/// Everyone who rolled the same initiative total this round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    /// The shared initiative total.
    pub total: i32,
    /// Members of the tier, in the order they act.
    pub members: Vec<InitiativeEntry>,
}

/// Something worth telling the reader about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    /// A new round begins.
    RoundStarted {
        /// 1-based round number.
        round: u32,
    },
    /// Initiative tiers for the round, highest first.
    InitiativeOrder {
        /// Tiers in acting order.
        tiers: Vec<TierSummary>,
    },
    /// An inactive combatant's turn came up.
    DownForTheCount {
        /// Combatant name.
        name: String,
    },
    /// An active combatant found no one left to attack.
    TwiddlesThumbs {
        /// Combatant name.
        name: String,
    },
    /// A single attack was resolved.
    Attack {
        /// Attacker name.
        attacker: String,
        /// Target name.
        target: String,
        /// Weapon used.
        weapon: String,
        /// Natural d20.
        roll: u32,
        /// Attacker's attack bonus.
        atk_bonus: i32,
        /// Target's armor class.
        ac: i32,
        /// Miss, hit, or critical.
        outcome: AttackOutcome,
        /// The weapon's damage dice, rolled on every attack.
        damage_roll: RollResult,
        /// Weapon damage plus damage bonus, before any multiplier.
        base_damage: i32,
        /// Multiplier applied on a critical.
        crit_mult: u32,
    },
    /// Queued damage was applied at the end of a tier.
    DamageTaken {
        /// Target name.
        target: String,
        /// Damage subtracted.
        amount: i32,
        /// Hit points after the subtraction.
        hp: i32,
    },
    /// A combatant dropped from positive to non-positive hit points.
    Died {
        /// Combatant name.
        name: String,
    },
    /// The match is over.
    MatchEnded {
        /// Whether any player is still active.
        players_alive: bool,
        /// Whether any monster is still active.
        monsters_alive: bool,
        /// Rounds fought.
        rounds: u32,
    },
}

impl std::fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundStarted { round } => write!(f, "=== ROUND {round} ==="),
            Self::InitiativeOrder { tiers } => {
                write!(f, "Initiative order:")?;
                for tier in tiers {
                    let members: Vec<String> = tier
                        .members
                        .iter()
                        .map(|m| format!("{} ({})", m.name, m.hp))
                        .collect();
                    write!(f, "\n{:>5}: {}", tier.total, members.join(", "))?;
                }
                Ok(())
            }
            Self::DownForTheCount { name } => write!(f, "{name} is down for the count."),
            Self::TwiddlesThumbs { name } => write!(f, "{name} twiddles their thumbs."),
            Self::Attack {
                attacker,
                target,
                weapon,
                roll,
                atk_bonus,
                ac,
                outcome,
                damage_roll,
                base_damage,
                crit_mult,
            } => {
                write!(
                    f,
                    "{attacker} attacks {target} with their {weapon} ({roll} + {atk_bonus} vs {ac}) and "
                )?;
                match outcome {
                    AttackOutcome::Critical => write!(
                        f,
                        "scores a CRITICAL HIT! ({base_damage}x{crit_mult}) Damage dice: {damage_roll}."
                    ),
                    AttackOutcome::Hit => write!(f, "scores a hit! Damage dice: {damage_roll}."),
                    AttackOutcome::Miss => write!(f, "misses."),
                }
            }
            Self::DamageTaken { target, amount, hp } => {
                write!(f, "{target} takes {amount} damage and is now at {hp} HP.")
            }
            Self::Died { name } => write!(f, "{name} has died."),
            Self::MatchEnded {
                players_alive,
                monsters_alive,
                rounds,
            } => {
                let plural = if *rounds == 1 { "" } else { "s" };
                write!(f, "Combat ended after {rounds} round{plural}.")?;
                if !players_alive {
                    write!(f, "\nPlayers are ALL DEAD.")?;
                }
                if !monsters_alive {
                    write!(f, "\nMonsters have all died.")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives narrative events in the order they happen.
pub trait ReportSink {
    /// Append one event.
    fn record(&mut self, event: CombatEvent);

    /// Whether events are wanted at all. The engine skips building them
    /// when this is false.
    fn enabled(&self) -> bool {
        true
    }
}

/// Drops everything; used for batch trials.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ReportSink for Silent {
    fn record(&mut self, _event: CombatEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Only the attack events.
    pub fn attacks(&self) -> Vec<&CombatEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, CombatEvent::Attack { .. }))
            .collect()
    }

    /// Names of combatants that died, in order of death.
    pub fn deaths(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CombatEvent::Died { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the whole log as newline-separated text.
    pub fn render(&self) -> String {
        self.events
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ReportSink for EventLog {
    fn record(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}
