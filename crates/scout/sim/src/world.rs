//! Ground truth of the simulated board.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scout_core::{CoLocated, Coordinate, MemoryOutpost, Perception, Step, VisibleCell};

use crate::SimConfig;
use crate::error::SimError;

/// Tagged entity at a fixed location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub id: String,
    pub location: Coordinate,
}

impl Marker {
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }
}

struct Station {
    id: String,
    outpost: MemoryOutpost,
}

/// Padded board with one outpost per corner.
pub struct World {
    far: i32,
    landmarks: Vec<Marker>,
    enemies: Vec<Marker>,
    stations: Vec<Station>,
    scouts: Vec<Marker>,
}

impl World {
    /// Empty board of `board_size` with outposts on the four corners.
    pub fn new(board_size: u32) -> Self {
        let far = i32::try_from(board_size).unwrap_or(i32::MAX).saturating_add(1);
        let stations = [(0, 0), (0, far), (far, 0), (far, far)]
            .into_iter()
            .enumerate()
            .map(|(k, (x, y))| Station {
                id: format!("O{k}"),
                outpost: MemoryOutpost::new(Coordinate::new(x, y)),
            })
            .collect();
        Self {
            far,
            landmarks: Vec::new(),
            enemies: Vec::new(),
            stations,
            scouts: Vec::new(),
        }
    }

    /// Random board from `config`. The same seed always yields the same board.
    pub fn generate(config: &SimConfig) -> Result<Self, SimError> {
        let mut world = Self::new(config.board_size);
        let side = (world.far + 1) as u64;
        let capacity = side * side - 4;
        let requested = u64::from(config.landmarks) + u64::from(config.enemies);
        if requested > capacity {
            return Err(SimError::Crowded {
                requested,
                capacity,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut taken: BTreeSet<Coordinate> =
            world.stations.iter().map(|s| s.outpost_location()).collect();

        for k in 0..config.landmarks {
            let at = world.free_cell(&mut rng, &taken);
            taken.insert(at);
            world.landmarks.push(Marker::new(format!("L{k}"), at));
        }
        for k in 0..config.enemies {
            let at = world.free_cell(&mut rng, &taken);
            taken.insert(at);
            world.enemies.push(Marker::new(format!("E{k}"), at));
        }
        for id in 0..config.scouts {
            let at = world.random_cell(&mut rng);
            world.scouts.push(Marker::new(format!("P{id}"), at));
        }

        tracing::debug!(
            "generated board {}x{}: {} landmarks, {} enemies, {} scouts",
            side,
            side,
            world.landmarks.len(),
            world.enemies.len(),
            world.scouts.len()
        );
        Ok(world)
    }

    fn random_cell(&self, rng: &mut ChaCha8Rng) -> Coordinate {
        Coordinate::new(rng.gen_range(0..=self.far), rng.gen_range(0..=self.far))
    }

    fn free_cell(&self, rng: &mut ChaCha8Rng, taken: &BTreeSet<Coordinate>) -> Coordinate {
        loop {
            let at = self.random_cell(rng);
            if !taken.contains(&at) {
                return at;
            }
        }
    }

    #[must_use]
    pub fn with_landmark(mut self, id: impl Into<String>, location: Coordinate) -> Self {
        self.landmarks.push(Marker::new(id, location));
        self
    }

    #[must_use]
    pub fn with_enemy(mut self, id: impl Into<String>, location: Coordinate) -> Self {
        self.enemies.push(Marker::new(id, location));
        self
    }

    /// Adds a scout; its id is its index, its tag `P<index>`.
    #[must_use]
    pub fn with_scout(mut self, location: Coordinate) -> Self {
        let id = self.scouts.len();
        self.scouts.push(Marker::new(format!("P{id}"), location));
        self
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        (0..=self.far).contains(&at.x) && (0..=self.far).contains(&at.y)
    }

    pub fn scout_count(&self) -> usize {
        self.scouts.len()
    }

    pub fn scout_position(&self, scout: usize) -> Option<Coordinate> {
        self.scouts.get(scout).map(|marker| marker.location)
    }

    pub fn landmarks(&self) -> &[Marker] {
        &self.landmarks
    }

    pub fn enemies(&self) -> &[Marker] {
        &self.enemies
    }

    pub fn outposts(&self) -> impl Iterator<Item = &MemoryOutpost> + '_ {
        self.stations.iter().map(|station| &station.outpost)
    }

    pub fn is_enemy_cell(&self, at: Coordinate) -> bool {
        self.enemies.iter().any(|enemy| enemy.location == at)
    }

    /// Moves `scout` by `step` if the destination is on the board.
    pub fn move_scout(&mut self, scout: usize, step: Step) -> bool {
        let far = self.far;
        let Some(marker) = self.scouts.get_mut(scout) else {
            return false;
        };
        let destination = marker.location.offset(step);
        let on_board = (0..=far).contains(&destination.x) && (0..=far).contains(&destination.y);
        if on_board {
            marker.location = destination;
        }
        on_board
    }

    /// What `scout` sees from where it stands.
    pub fn perception(&self, scout: usize) -> Perception<'_> {
        let Some(at) = self.scout_position(scout) else {
            return Perception::open();
        };

        let mut cells: [[Option<VisibleCell>; 3]; 3] = Default::default();
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let location = at.relative(i, j);
                if self.contains(location) {
                    *cell = Some(VisibleCell::with_tags(self.tags_at(location, scout)));
                }
            }
        }

        Perception::new(cells, self.co_located(at, scout))
    }

    fn tags_at(&self, location: Coordinate, viewer: usize) -> Vec<&str> {
        let markers = self
            .landmarks
            .iter()
            .chain(self.enemies.iter())
            .filter(|marker| marker.location == location)
            .map(|marker| marker.id.as_str());
        let stations = self
            .stations
            .iter()
            .filter(|station| station.outpost_location() == location)
            .map(|station| station.id.as_str());
        let scouts = self
            .scouts
            .iter()
            .enumerate()
            .filter(|(k, marker)| *k != viewer && marker.location == location)
            .map(|(_, marker)| marker.id.as_str());
        markers.chain(stations).chain(scouts).collect()
    }

    fn co_located(&self, at: Coordinate, viewer: usize) -> Vec<CoLocated<'_>> {
        let mut entities = Vec::new();
        for landmark in self.landmarks.iter().filter(|m| m.location == at) {
            entities.push(CoLocated::Landmark {
                id: &landmark.id,
                location: landmark.location,
            });
        }
        for enemy in self.enemies.iter().filter(|m| m.location == at) {
            entities.push(CoLocated::Enemy { id: &enemy.id });
        }
        for station in self.stations.iter().filter(|s| s.outpost_location() == at) {
            entities.push(CoLocated::Outpost(&station.outpost));
        }
        for (_, scout) in self
            .scouts
            .iter()
            .enumerate()
            .filter(|(k, m)| *k != viewer && m.location == at)
        {
            entities.push(CoLocated::Player { id: &scout.id });
        }
        entities
    }
}

impl Station {
    fn outpost_location(&self) -> Coordinate {
        scout_core::Outpost::location(&self.outpost)
    }
}
