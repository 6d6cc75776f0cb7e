use scout_core::{ConfigError, ControlState, Coordinate, MissionConfig};
use scout_sim::{SimConfig, SimError, Simulation, World};

fn centre_start(board_size: u32) -> World {
    World::new(board_size)
        .with_scout(Coordinate::new(5, 5))
        .with_scout(Coordinate::new(5, 6))
        .with_scout(Coordinate::new(6, 5))
        .with_scout(Coordinate::new(6, 6))
}

#[test]
fn scouts_on_a_quiet_board_all_report_home() {
    let mut sim = Simulation::with_world(centre_start(10), MissionConfig::new(10, 200))
        .expect("mission should be valid");

    let report = sim.run();

    assert_eq!(report.scouts, 4);
    assert_eq!(report.finished, 4);
    assert!(report.turns < 200);
    assert_eq!(report.rejected_moves, 0);
    assert_eq!(report.enemy_contacts, 0);
    for (k, outpost) in report.outposts.iter().enumerate() {
        assert_eq!(outpost.data, Some(format!("P{k}")), "outpost {k}");
        assert!(!outpost.safe.is_empty(), "outpost {k}");
        assert!(outpost.enemy.is_empty(), "outpost {k}");
    }
}

#[test]
fn scouts_end_on_their_home_corners() {
    let mut sim = Simulation::with_world(centre_start(10), MissionConfig::new(10, 200))
        .expect("mission should be valid");
    sim.run();

    let corners = [(0, 0), (0, 11), (11, 0), (11, 11)];
    for (k, (x, y)) in corners.into_iter().enumerate() {
        let home = Coordinate::new(x, y);
        assert_eq!(sim.world().scout_position(k), Some(home));
        let agent = sim.agent(k).expect("scout exists");
        assert_eq!(agent.control(), ControlState::Done);
        assert_eq!(agent.state().position(), Some(home));
    }
}

#[test]
fn enemies_seen_on_the_way_reach_the_outpost() {
    // scout 0 walks the diagonal to (0, 0) and explores toward (3, 3)
    let world = World::new(10)
        .with_scout(Coordinate::new(5, 5))
        .with_enemy("E0", Coordinate::new(2, 3));
    let mut sim =
        Simulation::with_world(world, MissionConfig::new(10, 120)).expect("mission should be valid");

    let report = sim.run();

    assert_eq!(report.finished, 1);
    assert!(report.outposts[0].enemy.contains(&Coordinate::new(2, 3)));
    assert!(!report.outposts[0].safe.contains(&Coordinate::new(2, 3)));
}

#[test]
fn generated_missions_are_reproducible() {
    let config = SimConfig::default();

    let first = Simulation::new(&config).expect("default board fits").run();
    let second = Simulation::new(&config).expect("default board fits").run();

    assert_eq!(first, second);
    assert_eq!(first.scouts, config.scouts as usize);
}

#[test]
fn generated_default_mission_completes() {
    let report = Simulation::new(&SimConfig::default())
        .expect("default board fits")
        .run();

    assert_eq!(report.finished, report.scouts);
    assert!(report.turns <= SimConfig::DEFAULT_TURN_BUDGET);
}

#[test]
fn running_out_of_turns_stops_the_loop() {
    let mut sim = Simulation::with_world(centre_start(10), MissionConfig::new(10, 5))
        .expect("mission should be valid");

    let report = sim.run();

    assert_eq!(report.turns, 5);
    assert_eq!(report.finished, 0);
}

#[test]
fn oversized_boards_are_refused_before_generation() {
    let config = SimConfig {
        board_size: 3_000_000_000,
        ..SimConfig::default()
    };

    assert!(matches!(
        Simulation::new(&config),
        Err(SimError::Mission(ConfigError::BoardTooLarge { .. }))
    ));
}
