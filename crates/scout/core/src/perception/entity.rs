use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use crate::state::Coordinate;

/// Outpost as exposed to visiting agents.
///
/// Outposts are shared by every agent that reaches them, so all methods take
/// `&self`; implementations provide their own interior mutability. Location
/// collections have set semantics, which makes repeated deposits harmless.
pub trait Outpost: Send + Sync {
    fn location(&self) -> Coordinate;

    /// Opaque payload slot, `None` until somebody writes to it.
    fn data(&self) -> Option<String>;

    fn set_data(&self, data: String);

    fn add_safe_location(&self, location: Coordinate);

    fn add_enemy_location(&self, location: Coordinate);
}

/// Entity sharing the agent's cell this tick.
#[derive(Clone, Copy)]
pub enum CoLocated<'a> {
    Player { id: &'a str },
    Enemy { id: &'a str },
    Landmark { id: &'a str, location: Coordinate },
    Outpost(&'a dyn Outpost),
}

impl core::fmt::Debug for CoLocated<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Player { id } => f.debug_struct("Player").field("id", id).finish(),
            Self::Enemy { id } => f.debug_struct("Enemy").field("id", id).finish(),
            Self::Landmark { id, location } => f
                .debug_struct("Landmark")
                .field("id", id)
                .field("location", location)
                .finish(),
            Self::Outpost(outpost) => f
                .debug_tuple("Outpost")
                .field(&outpost.location())
                .finish(),
        }
    }
}

/// Contents of a [`MemoryOutpost`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutpostRecord {
    pub location: Coordinate,
    pub data: Option<String>,
    pub safe: BTreeSet<Coordinate>,
    pub enemy: BTreeSet<Coordinate>,
}

/// In-process outpost backed by a mutex.
#[derive(Debug, Default)]
pub struct MemoryOutpost {
    record: Mutex<OutpostRecord>,
}

impl MemoryOutpost {
    pub fn new(location: Coordinate) -> Self {
        Self {
            record: Mutex::new(OutpostRecord {
                location,
                ..OutpostRecord::default()
            }),
        }
    }

    // A poisoned lock still holds a consistent record: every write is a
    // single insert or assignment.
    fn lock(&self) -> MutexGuard<'_, OutpostRecord> {
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of everything deposited so far.
    pub fn record(&self) -> OutpostRecord {
        self.lock().clone()
    }
}

impl Outpost for MemoryOutpost {
    fn location(&self) -> Coordinate {
        self.lock().location
    }

    fn data(&self) -> Option<String> {
        self.lock().data.clone()
    }

    fn set_data(&self, data: String) {
        self.lock().data = Some(data);
    }

    fn add_safe_location(&self, location: Coordinate) {
        self.lock().safe.insert(location);
    }

    fn add_enemy_location(&self, location: Coordinate) {
        self.lock().enemy.insert(location);
    }
}
