//! Turn scheduler driving scout agents over a [`World`].

use scout_core::{AgentIdentity, ControlState, MissionConfig, OutpostRecord, ScoutAgent};

use crate::SimConfig;
use crate::error::SimError;
use crate::world::World;

/// Outcome of a simulated mission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionReport {
    pub turns: u32,
    pub scouts: usize,
    /// Scouts that delivered their knowledge home.
    pub finished: usize,
    /// Moves that ended on an enemy cell.
    pub enemy_contacts: u32,
    /// Steps refused because they left the board.
    pub rejected_moves: u32,
    pub outposts: Vec<OutpostRecord>,
}

/// Runs every scout through the host call sequence each turn: communication
/// phase for all, then decide / validate / commit one scout at a time.
pub struct Simulation {
    world: World,
    agents: Vec<ScoutAgent>,
    budget: u32,
    turn: u32,
    enemy_contacts: u32,
    rejected_moves: u32,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.mission().validate()?;
        let world = World::generate(config)?;
        Self::with_world(world, config.mission())
    }

    /// Wraps an existing world. Scout `k` of the world gets identity `k`.
    pub fn with_world(world: World, mission: MissionConfig) -> Result<Self, SimError> {
        let mission = mission.with_landmarks(
            world
                .landmarks()
                .iter()
                .map(|landmark| landmark.location)
                .collect(),
        );
        let agents = (0..world.scout_count())
            .map(|k| ScoutAgent::init(AgentIdentity::scout(k as u32), mission.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            world,
            agents,
            budget: mission.turn_budget,
            turn: 0,
            enemy_contacts: 0,
            rejected_moves: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self, scout: usize) -> Option<&ScoutAgent> {
        self.agents.get(scout)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn all_done(&self) -> bool {
        self.agents
            .iter()
            .all(|agent| agent.control() == ControlState::Done)
    }

    /// Plays one turn for every scout.
    pub fn step(&mut self) {
        for (k, agent) in self.agents.iter_mut().enumerate() {
            agent.on_communication_phase(&self.world.perception(k));
        }

        for k in 0..self.agents.len() {
            let step = self.agents[k].decide(&self.world.perception(k));
            if self.world.move_scout(k, step) {
                self.agents[k].on_move_committed();
                let at = self.world.scout_position(k);
                if at.is_some_and(|at| self.world.is_enemy_cell(at)) {
                    self.enemy_contacts += 1;
                }
            } else {
                self.rejected_moves += 1;
                tracing::warn!(
                    "turn {}: scout {} tried to leave the board with {}",
                    self.turn,
                    k,
                    step
                );
            }
        }

        self.turn += 1;
    }

    /// Plays until every scout is done or the turn budget runs out.
    pub fn run(&mut self) -> MissionReport {
        while self.turn < self.budget && !self.all_done() {
            self.step();
        }
        self.report()
    }

    pub fn report(&self) -> MissionReport {
        MissionReport {
            turns: self.turn,
            scouts: self.agents.len(),
            finished: self
                .agents
                .iter()
                .filter(|agent| agent.control() == ControlState::Done)
                .count(),
            enemy_contacts: self.enemy_contacts,
            rejected_moves: self.rejected_moves,
            outposts: self.world.outposts().map(|outpost| outpost.record()).collect(),
        }
    }
}
