use super::{EventKind, EventOutcome};

/// Winning condition of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub winner: EventKind,
    pub priority: u32,
}

impl Selection {
    const NONE: Self = Self {
        winner: EventKind::NoEvent,
        priority: 0,
    };
}

/// Picks the highest-priority fired outcome. Equal priorities keep the one
/// evaluated first; nothing fired yields [`EventKind::NoEvent`].
pub fn select(outcomes: &[EventOutcome]) -> Selection {
    outcomes
        .iter()
        .filter(|outcome| outcome.fired)
        .fold(Selection::NONE, |best, outcome| {
            let priority = outcome.kind.priority();
            if priority > best.priority {
                Selection {
                    winner: outcome.kind,
                    priority,
                }
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_priority_wins() {
        let outcomes = [
            EventOutcome::new(EventKind::LandmarkSighted, true),
            EventOutcome::new(EventKind::NotOriented, true),
            EventOutcome::new(EventKind::EndOfMission, false),
        ];
        assert_eq!(select(&outcomes).winner, EventKind::LandmarkSighted);
    }

    #[test]
    fn ties_go_to_the_first_evaluated() {
        let outcomes = [
            EventOutcome::new(EventKind::PlayerSighted, true),
            EventOutcome::new(EventKind::OutpostReached, true),
        ];
        assert_eq!(select(&outcomes).winner, EventKind::PlayerSighted);

        let reversed = [outcomes[1], outcomes[0]];
        assert_eq!(select(&reversed).winner, EventKind::OutpostReached);
    }

    #[test]
    fn nothing_fired_selects_no_event() {
        let outcomes = [EventOutcome::new(EventKind::Oriented, false)];
        assert_eq!(select(&outcomes), Selection::NONE);
        assert_eq!(select(&[]).winner, EventKind::NoEvent);
    }
}
