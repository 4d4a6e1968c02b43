//! The turn engine: one round of initiative tiers.
//!
//! Every combatant rolls initiative, including the fallen. Tiers act from
//! the highest total down. Within a tier every member acts before any of the
//! damage they queued is applied, so two combatants on the same total always
//! trade blows.

pub mod action;

pub use action::{AttackOutcome, AttackResolution, PendingDamage, resolve_attack};

use std::collections::BTreeMap;

use crate::dice::{Die, RandomSource};
use crate::encounter::{CombatantRef, Encounter};
use crate::error::{MechError, MechResult};
use crate::report::{CombatEvent, InitiativeEntry, ReportSink, TierSummary};

/// Combatants sharing one initiative total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiativeTier {
    /// `d10 + initiative modifier`.
    pub total: i32,
    /// Members in the order they rolled: players first, then monsters.
    pub members: Vec<CombatantRef>,
}

/// Roll initiative for everyone and group the results, highest total first.
pub fn roll_initiative<R: RandomSource + ?Sized>(
    encounter: &Encounter,
    rng: &mut R,
) -> MechResult<Vec<InitiativeTier>> {
    let mut tiers: BTreeMap<i32, Vec<CombatantRef>> = BTreeMap::new();
    for at in encounter.all_refs() {
        let combatant = encounter.get(at)?;
        let total = Die::D10.roll(rng)? as i32 + combatant.initiative_mod;
        tiers.entry(total).or_default().push(at);
    }
    Ok(tiers
        .into_iter()
        .rev()
        .map(|(total, members)| InitiativeTier { total, members })
        .collect())
}

/// Resolve one full round: every tier, in order, with end-of-tier damage.
pub fn run_round<R, S>(encounter: &mut Encounter, round: u32, rng: &mut R, sink: &mut S) -> MechResult<()>
where
    R: RandomSource + ?Sized,
    S: ReportSink + ?Sized,
{
    if sink.enabled() {
        sink.record(CombatEvent::RoundStarted { round });
    }

    let tiers = roll_initiative(encounter, rng)?;
    if sink.enabled() {
        sink.record(CombatEvent::InitiativeOrder {
            tiers: summarize(encounter, &tiers)?,
        });
    }
    tracing::trace!(round, tiers = tiers.len(), "initiative rolled");

    for tier in &tiers {
        let mut pending = Vec::new();
        for &actor in &tier.members {
            take_turn(encounter, actor, rng, sink, &mut pending)?;
        }
        apply_damage(encounter, pending, sink)?;
    }
    Ok(())
}

/// One combatant's action within a tier. Attacks are queued, not applied.
pub fn take_turn<R, S>(
    encounter: &Encounter,
    actor_ref: CombatantRef,
    rng: &mut R,
    sink: &mut S,
    pending: &mut Vec<PendingDamage>,
) -> MechResult<()>
where
    R: RandomSource + ?Sized,
    S: ReportSink + ?Sized,
{
    let actor = encounter.get(actor_ref)?;
    if !actor.is_active() {
        if sink.enabled() {
            sink.record(CombatEvent::DownForTheCount {
                name: actor.name.clone(),
            });
        }
        return Ok(());
    }

    let targets = encounter.active_refs(actor.side.opponent());
    if targets.is_empty() {
        if sink.enabled() {
            sink.record(CombatEvent::TwiddlesThumbs {
                name: actor.name.clone(),
            });
        }
        return Ok(());
    }

    for _ in 0..actor.attacks_per_round {
        let target_ref = pick_target(&targets, rng)?;
        let target = encounter.get(target_ref)?;
        let attack = resolve_attack(actor, target, rng)?;
        if sink.enabled() {
            sink.record(CombatEvent::Attack {
                attacker: actor.name.clone(),
                target: target.name.clone(),
                weapon: actor.weapon.name.to_string(),
                roll: attack.natural,
                atk_bonus: actor.atk_bonus,
                ac: target.ac,
                outcome: attack.outcome,
                damage_roll: attack.damage_roll.clone(),
                base_damage: attack.base_damage,
                crit_mult: actor.weapon.crit_mult,
            });
        }
        if let Some(amount) = attack.queued_damage(actor.weapon) {
            pending.push(PendingDamage {
                target: target_ref,
                amount,
            });
        }
    }
    Ok(())
}

/// Apply queued damage in queue order. Targets already knocked out earlier
/// in the same batch still take the rest of their damage.
pub fn apply_damage<S: ReportSink + ?Sized>(
    encounter: &mut Encounter,
    pending: Vec<PendingDamage>,
    sink: &mut S,
) -> MechResult<()> {
    for entry in pending {
        let target = encounter.get_mut(entry.target)?;
        let killed = target.take_damage(entry.amount);
        if sink.enabled() {
            sink.record(CombatEvent::DamageTaken {
                target: target.name.clone(),
                amount: entry.amount,
                hp: target.hp(),
            });
            if killed {
                sink.record(CombatEvent::Died {
                    name: target.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Choose uniformly among the candidates. A draw is made even when only one
/// candidate remains.
fn pick_target<R: RandomSource + ?Sized>(
    candidates: &[CombatantRef],
    rng: &mut R,
) -> MechResult<CombatantRef> {
    if candidates.is_empty() {
        return Err(MechError::InvalidArgument("no targets to choose from".into()));
    }
    let last = candidates.len() as i32 - 1;
    let index = rng.uniform_int(0, last).clamp(0, last) as usize;
    Ok(candidates[index])
}

fn summarize(encounter: &Encounter, tiers: &[InitiativeTier]) -> MechResult<Vec<TierSummary>> {
    tiers
        .iter()
        .map(|tier| -> MechResult<TierSummary> {
            let members = tier
                .members
                .iter()
                .map(|&at| {
                    encounter.get(at).map(|c| InitiativeEntry {
                        name: c.name.clone(),
                        hp: c.hp(),
                    })
                })
                .collect::<MechResult<Vec<_>>>()?;
            Ok(TierSummary {
                total: tier.total,
                members,
            })
        })
        .collect()
}
