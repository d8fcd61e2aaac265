//! Explicit run state owned by the orchestration layer.

use rogue_core::{ActorState, CombatResult, EntityId, Turn};

use crate::api::{Result, RuntimeError};
use crate::daily::DailySeed;

/// One resolved attack, as recorded in the run log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatLogEntry {
    pub turn: Turn,
    pub attacker: EntityId,
    pub defender: EntityId,
    pub result: CombatResult,
}

/// Mutable state of a daily run.
///
/// The combat engine never sees this struct; it receives snapshots taken from
/// it and the [`crate::Encounter`] writes results back.
#[derive(Clone, Debug)]
pub struct RunState {
    seed: DailySeed,
    turn: Turn,
    actors: Vec<ActorState>,
    log: Vec<CombatLogEntry>,
}

impl RunState {
    /// Starts a run with the player as the only actor.
    pub fn new(seed: DailySeed, player: ActorState) -> Self {
        Self {
            seed,
            turn: Turn::ZERO,
            actors: vec![player],
            log: Vec::new(),
        }
    }

    /// Adds an actor to the run.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateActor`] when the id is taken.
    pub fn spawn(&mut self, actor: ActorState) -> Result<()> {
        if self.actor(actor.id).is_some() {
            return Err(RuntimeError::DuplicateActor(actor.id));
        }
        tracing::debug!(actor = %actor.id, name = %actor.name, hp = actor.hp, "spawned actor");
        self.actors.push(actor);
        Ok(())
    }

    pub fn seed(&self) -> DailySeed {
        self.seed
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    /// Looks up an actor or fails with [`RuntimeError::UnknownActor`].
    pub fn require(&self, id: EntityId) -> Result<&ActorState> {
        self.actor(id).ok_or(RuntimeError::UnknownActor(id))
    }

    pub fn require_mut(&mut self, id: EntityId) -> Result<&mut ActorState> {
        self.actor_mut(id).ok_or(RuntimeError::UnknownActor(id))
    }

    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter()
    }

    pub fn log(&self) -> &[CombatLogEntry] {
        &self.log
    }

    /// Moves the turn counter forward and drops expired status effects.
    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.next();
        let turn = self.turn;
        for actor in &mut self.actors {
            actor.status.remove_expired(turn);
        }
    }

    pub(crate) fn record(&mut self, entry: CombatLogEntry) {
        self.log.push(entry);
    }
}
