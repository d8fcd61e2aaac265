//! Attack orchestration on top of the pure combat engine.
//!
//! An [`Encounter`] is the only place where combat results are written back
//! into a [`RunState`]: it snapshots both actors, resolves the attack with the
//! turn's seed, applies the health deltas and advances the turn.

use rogue_core::{CombatResult, EntityId, GameError, StatusEffectKind, resolve};

use crate::api::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::state::{CombatLogEntry, RunState};

/// How a [`Encounter::fight`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightOutcome {
    /// The foe was defeated.
    Victory,
    /// The player was defeated.
    Defeat,
    /// Both actors were still standing after the turn limit.
    Draw,
}

/// Summary of an automatic fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FightReport {
    pub outcome: FightOutcome,
    /// Attacks resolved during the fight.
    pub attacks: u32,
}

/// Binds run content to combat operations.
#[derive(Clone, Copy)]
pub struct Encounter<'a> {
    oracles: &'a OracleManager,
}

impl<'a> Encounter<'a> {
    pub fn new(oracles: &'a OracleManager) -> Self {
        Self { oracles }
    }

    /// Resolves one attack and writes the result back into `state`.
    ///
    /// # Errors
    ///
    /// Fails without touching `state` when either actor is unknown, the
    /// attacker targets itself or is already defeated, or combat resolution
    /// rejects the snapshots.
    pub fn attack(
        &self,
        state: &mut RunState,
        attacker: EntityId,
        defender: EntityId,
    ) -> Result<CombatResult> {
        if attacker == defender {
            return Err(RuntimeError::SelfTarget(attacker));
        }

        let turn = state.turn();
        let attacker_state = state.require(attacker)?;
        if attacker_state.is_defeated() {
            tracing::warn!(%attacker, %turn, "defeated actor tried to attack");
            return Err(RuntimeError::ActorDefeated(attacker));
        }
        let attacker_snapshot = attacker_state.snapshot(turn);
        let defender_snapshot = state.require(defender)?.snapshot(turn);

        let seed = state.seed().turn_seed(turn);
        let env = self.oracles.as_combat_env();
        let result = resolve(&attacker_snapshot, &defender_snapshot, Some(seed), &env)
            .inspect_err(|err| {
                tracing::warn!(
                    %attacker,
                    %defender,
                    %turn,
                    severity = err.severity().as_str(),
                    code = err.error_code(),
                    error = %err,
                    "combat resolution rejected"
                );
            })?;

        tracing::debug!(
            %attacker,
            %defender,
            %turn,
            damage = result.damage,
            critical = result.critical,
            synergies = ?result.synergy_names(),
            "resolved attack"
        );

        state.require_mut(attacker)?.apply_hp_delta(result.attacker_hp_delta);
        state.require_mut(defender)?.apply_hp_delta(result.defender_hp_delta);

        if result.defender_defeated {
            tracing::info!(%attacker, %defender, %turn, "actor defeated");
        }
        if result.attacker_defeated {
            tracing::info!(%defender, %attacker, %turn, "attacker fell to thorns");
        }

        state.record(CombatLogEntry {
            turn,
            attacker,
            defender,
            result: result.clone(),
        });
        state.advance_turn();

        Ok(result)
    }

    /// Applies a status effect lasting the configured duration.
    ///
    /// Returns false when the target has no free status slot.
    pub fn apply_status(
        &self,
        state: &mut RunState,
        target: EntityId,
        kind: StatusEffectKind,
    ) -> Result<bool> {
        let expires_at = state.turn() + self.oracles.config().status_duration;
        let applied = state.require_mut(target)?.status.add(kind, expires_at);
        if applied {
            tracing::debug!(%target, %kind, %expires_at, "applied status effect");
        } else {
            tracing::warn!(%target, %kind, "status effect dropped, no free slot");
        }
        Ok(applied)
    }

    /// Alternates attacks between the player and `foe` until one falls or the
    /// turn limit is reached. The player strikes first.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::ActorDefeated`] without resolving any attack
    /// when either side is already down.
    pub fn fight(&self, state: &mut RunState, foe: EntityId) -> Result<FightReport> {
        let player = EntityId::PLAYER;
        for id in [player, foe] {
            if state.require(id)?.is_defeated() {
                return Err(RuntimeError::ActorDefeated(id));
            }
        }

        let max_turns = self.oracles.config().max_turns;
        let mut attacks = 0;
        let (mut attacker, mut defender) = (player, foe);

        while attacks < max_turns {
            self.attack(state, attacker, defender)?;
            attacks += 1;

            let player_down = state.require(player)?.is_defeated();
            let foe_down = state.require(foe)?.is_defeated();
            let outcome = match (player_down, foe_down) {
                (true, _) => Some(FightOutcome::Defeat),
                (false, true) => Some(FightOutcome::Victory),
                (false, false) => None,
            };
            if let Some(outcome) = outcome {
                tracing::info!(%foe, ?outcome, attacks, "fight finished");
                return Ok(FightReport { outcome, attacks });
            }

            core::mem::swap(&mut attacker, &mut defender);
        }

        tracing::info!(%foe, attacks, "fight reached the turn limit");
        Ok(FightReport {
            outcome: FightOutcome::Draw,
            attacks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DailySeed;
    use rogue_core::{
        ActorState, Attribute, CombatError, CombatTables, GameConfig, ItemCatalog, ItemId,
        ItemSpec, RuleTables, SynergyEffect, SynergyRule, TagDefinition, TagRegistry, Turn,
    };

    fn oracles(config: GameConfig) -> OracleManager {
        let tags = TagRegistry::new(vec![TagDefinition::new("fire").with_synergy(
            SynergyRule::pair(SynergyEffect::More(50)),
        )])
        .unwrap();
        let items = ItemCatalog::build(
            &tags,
            vec![
                ItemSpec::new(1, "Ember Blade")
                    .tag("fire")
                    .attribute(Attribute::BaseDamage, 10),
                ItemSpec::new(2, "Ember Ring")
                    .tag("fire")
                    .attribute(Attribute::BaseDamage, 10),
                ItemSpec::new(3, "Spiked Hide").attribute(Attribute::Thorns, 50),
            ],
        )
        .unwrap();
        OracleManager::new(items, RuleTables::new(CombatTables::new(), tags), config)
    }

    fn run() -> RunState {
        let mut player = ActorState::new(EntityId::PLAYER, "Hero", 40);
        player.equip(ItemId(1)).unwrap();
        player.equip(ItemId(2)).unwrap();
        let mut state = RunState::new(DailySeed::from_raw(7), player);
        state.spawn(ActorState::new(EntityId(1), "Slime", 100)).unwrap();
        state
    }

    #[test]
    fn attack_applies_deltas_and_advances_turn() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut state = run();

        let result = encounter.attack(&mut state, EntityId::PLAYER, EntityId(1)).unwrap();

        assert!(result.damage >= 30);
        assert_eq!(
            state.require(EntityId(1)).unwrap().hp,
            100 - result.damage as i32
        );
        assert_eq!(state.turn(), Turn(1));
        assert_eq!(state.log().len(), 1);
        assert_eq!(state.log()[0].result, result);
    }

    #[test]
    fn same_seed_same_log() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut a = run();
        let mut b = run();
        for _ in 0..3 {
            encounter.attack(&mut a, EntityId::PLAYER, EntityId(1)).unwrap();
            encounter.attack(&mut b, EntityId::PLAYER, EntityId(1)).unwrap();
        }
        assert_eq!(a.log(), b.log());
    }

    #[test]
    fn invalid_attacks_leave_state_untouched() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut state = run();

        assert!(matches!(
            encounter.attack(&mut state, EntityId::PLAYER, EntityId::PLAYER),
            Err(RuntimeError::SelfTarget(_))
        ));
        assert!(matches!(
            encounter.attack(&mut state, EntityId::PLAYER, EntityId(5)),
            Err(RuntimeError::UnknownActor(EntityId(5)))
        ));

        state.require_mut(EntityId(1)).unwrap().hp = 0;
        assert!(matches!(
            encounter.attack(&mut state, EntityId(1), EntityId::PLAYER),
            Err(RuntimeError::ActorDefeated(EntityId(1)))
        ));

        assert_eq!(state.turn(), Turn::ZERO);
        assert!(state.log().is_empty());
    }

    #[test]
    fn status_lasts_configured_duration() {
        let config = GameConfig {
            status_duration: 2,
            ..GameConfig::default()
        };
        let oracles = oracles(config);
        let encounter = Encounter::new(&oracles);
        let mut state = run();

        assert!(
            encounter
                .apply_status(&mut state, EntityId(1), StatusEffectKind::Shielded)
                .unwrap()
        );
        encounter.attack(&mut state, EntityId::PLAYER, EntityId(1)).unwrap();
        assert!(
            state
                .require(EntityId(1))
                .unwrap()
                .status
                .contains(StatusEffectKind::Shielded)
        );
        encounter.attack(&mut state, EntityId::PLAYER, EntityId(1)).unwrap();
        assert!(state.require(EntityId(1)).unwrap().status.is_empty());
    }

    #[test]
    fn fight_ends_in_victory() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut state = run();

        let report = encounter.fight(&mut state, EntityId(1)).unwrap();

        assert_eq!(report.outcome, FightOutcome::Victory);
        assert!(state.require(EntityId(1)).unwrap().is_defeated());
        assert_eq!(state.log().len() as u32, report.attacks);
    }

    #[test]
    fn thorns_can_defeat_the_player() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut state = run();
        state.require_mut(EntityId(1)).unwrap().equip(ItemId(3)).unwrap();

        let report = encounter.fight(&mut state, EntityId(1)).unwrap();

        assert_eq!(report.outcome, FightOutcome::Defeat);
        assert_eq!(report.attacks, 1);
        assert_eq!(state.require(EntityId::PLAYER).unwrap().hp, 0);
    }

    #[test]
    fn fight_with_defeated_foe_is_rejected() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut state = run();
        state.require_mut(EntityId(1)).unwrap().hp = 0;

        assert!(matches!(
            encounter.fight(&mut state, EntityId(1)),
            Err(RuntimeError::ActorDefeated(EntityId(1)))
        ));
        assert_eq!(state.turn(), Turn::ZERO);
        assert!(state.log().is_empty());
    }

    #[test]
    fn rejected_resolution_leaves_state_untouched() {
        let oracles = oracles(GameConfig::default());
        let encounter = Encounter::new(&oracles);
        let mut state = run();
        state.require_mut(EntityId(1)).unwrap().equip(ItemId(99)).unwrap();

        let err = encounter
            .attack(&mut state, EntityId::PLAYER, EntityId(1))
            .unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::Combat(CombatError::ItemNotFound {
                item: ItemId(99),
                ..
            })
        ));
        assert_eq!(state.require(EntityId(1)).unwrap().hp, 100);
        assert_eq!(state.turn(), Turn::ZERO);
        assert!(state.log().is_empty());
    }

    #[test]
    fn fight_draws_at_turn_limit() {
        let oracles = oracles(GameConfig::with_max_turns(2));
        let encounter = Encounter::new(&oracles);
        let mut state = run();
        state.require_mut(EntityId(1)).unwrap().max_hp = 10_000;
        state.require_mut(EntityId(1)).unwrap().hp = 10_000;

        let report = encounter.fight(&mut state, EntityId(1)).unwrap();

        assert_eq!(report.outcome, FightOutcome::Draw);
        assert_eq!(report.attacks, 2);
    }
}
