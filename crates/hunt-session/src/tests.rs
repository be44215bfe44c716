//! Unit tests for the session state container.

#[cfg(test)]
mod config {
    use crate::SessionConfig;

    #[test]
    fn standard_defaults() {
        let cfg = SessionConfig::new(7);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.treasure_count, 5);
        assert_eq!(cfg.obstacle_count, 3);
        assert_eq!(cfg.interaction_radius_m, 30.0);
    }
}

#[cfg(test)]
mod stats {
    use crate::{GameStats, OBSTACLE_CLEAR_POINTS};

    #[test]
    fn records_accumulate() {
        let mut stats = GameStats::default();
        stats.record_treasure(40);
        stats.record_treasure(15);
        stats.record_obstacle();
        assert_eq!(stats.treasures_found, 2);
        assert_eq!(stats.obstacles_cleared, 1);
        assert_eq!(stats.score, 55 + OBSTACLE_CLEAR_POINTS);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut stats = GameStats::default();
        stats.record_treasure(100);
        stats.reset();
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn display() {
        let mut stats = GameStats::default();
        stats.record_obstacle();
        assert_eq!(stats.to_string(), "0 treasures, 1 obstacles, 10 points");
    }
}

#[cfg(test)]
mod session {
    use hunt_core::{HuntError, TreasureId, UserLocation};

    use crate::{ClearOutcome, CollectOutcome, GameSession, LocationUpdate, SessionConfig};

    const FIX: UserLocation = UserLocation {
        point: hunt_core::GeoPoint { lat: 40.0, lon: -74.0 },
        accuracy_m: 5.0,
    };

    fn started(seed: u64) -> GameSession {
        let mut session = GameSession::new(SessionConfig::new(seed)).unwrap();
        session.update_location(FIX);
        session
    }

    /// Move the player to stand exactly on a target.
    fn walk_to(session: &mut GameSession, target: hunt_core::GeoPoint) {
        session.update_location(UserLocation::new(target.lat, target.lon, 5.0));
    }

    #[test]
    fn rejects_bad_interaction_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut cfg = SessionConfig::new(1);
            cfg.interaction_radius_m = radius;
            assert!(matches!(
                GameSession::new(cfg),
                Err(HuntError::Config(_))
            ));
        }
    }

    #[test]
    fn first_fix_spawns_the_world() {
        let mut session = GameSession::new(SessionConfig::new(42)).unwrap();
        assert!(session.treasures().is_empty());

        let update = session.update_location(FIX);
        assert_eq!(update, LocationUpdate::FirstFix { treasures: 5, obstacles: 3 });
        assert_eq!(session.treasures().len(), 5);
        assert_eq!(session.obstacles().len(), 3);
        assert_eq!(session.stats().score, 0);
    }

    #[test]
    fn later_fixes_never_move_the_world() {
        let mut session = started(42);
        let before: Vec<_> = session
            .treasures()
            .iter()
            .map(|t| (t.id, t.location))
            .collect();

        let moved = session.update_location(UserLocation::new(40.001, -74.0, 5.0));
        match moved {
            LocationUpdate::Moved { displacement_m } => {
                assert!((displacement_m - 111.195).abs() < 1.0, "{displacement_m}");
            }
            other => panic!("expected Moved, got {other:?}"),
        }

        let after: Vec<_> = session
            .treasures()
            .iter()
            .map(|t| (t.id, t.location))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn interactions_require_a_fix() {
        let mut session = GameSession::new(SessionConfig::new(1)).unwrap();
        assert!(matches!(
            session.collect_treasure(TreasureId(1)),
            Err(HuntError::NoLocation)
        ));
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut session = started(42);
        let ghost = TreasureId(0);
        assert!(session.treasure(ghost).is_none());
        assert!(matches!(
            session.collect_treasure(ghost),
            Err(HuntError::TreasureNotFound(id)) if id == ghost
        ));
    }

    #[test]
    fn out_of_range_collect_is_rejected() {
        // Every treasure spawns at least 50 m out; the radius is 30 m.
        let mut session = started(42);
        let id = session.treasures()[0].id;

        match session.collect_treasure(id).unwrap() {
            CollectOutcome::OutOfRange { distance_m } => assert!(distance_m > 30.0),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        assert_eq!(session.stats().score, 0);
        assert!(!session.treasures()[0].found);
    }

    #[test]
    fn collect_within_range_scores_once() {
        let mut session = started(42);
        let target = session.treasures()[0].clone();

        walk_to(&mut session, target.location);
        match session.collect_treasure(target.id).unwrap() {
            CollectOutcome::Collected { name, points } => {
                assert_eq!(name, target.name);
                assert_eq!(points, target.points);
            }
            other => panic!("expected Collected, got {other:?}"),
        }
        assert!(session.treasure(target.id).unwrap().found);
        assert_eq!(session.stats().treasures_found, 1);
        assert_eq!(session.stats().score, target.points);

        // Found flips once; a second collect is a no-op.
        assert_eq!(
            session.collect_treasure(target.id).unwrap(),
            CollectOutcome::AlreadyFound
        );
        assert_eq!(session.stats().treasures_found, 1);
        assert_eq!(session.stats().score, target.points);
    }

    #[test]
    fn clear_within_range_awards_flat_bonus() {
        let mut session = started(42);
        let target = session.obstacles()[0].clone();

        walk_to(&mut session, target.location);
        match session.clear_obstacle(target.id).unwrap() {
            ClearOutcome::Cleared { kind, difficulty } => {
                assert_eq!(kind, target.kind);
                assert_eq!(difficulty, target.difficulty);
            }
            other => panic!("expected Cleared, got {other:?}"),
        }
        assert!(session.obstacle(target.id).unwrap().completed);
        assert_eq!(session.stats().obstacles_cleared, 1);
        assert_eq!(session.stats().score, 10);

        assert_eq!(
            session.clear_obstacle(target.id).unwrap(),
            ClearOutcome::AlreadyCleared
        );
        assert_eq!(session.stats().score, 10);
    }

    #[test]
    fn selection_tracks_known_ids_only() {
        let mut session = started(42);
        let id = session.treasures()[0].id;

        session.select_treasure(Some(id));
        assert_eq!(session.selected_treasure().unwrap().id, id);

        session.select_treasure(Some(TreasureId(0)));
        assert!(session.selected_treasure().is_none());
    }

    #[test]
    fn collecting_clears_the_selection() {
        let mut session = started(42);
        let target = session.treasures()[0].clone();

        session.select_treasure(Some(target.id));
        walk_to(&mut session, target.location);
        session.collect_treasure(target.id).unwrap();
        assert!(session.selected_treasure().is_none());
    }

    #[test]
    fn nearby_lists_only_actionable_objects() {
        let mut session = started(42);
        // At the spawn point everything is at least 50 m out.
        assert!(session.nearby_treasures().is_empty());

        let target = session.treasures()[0].clone();
        walk_to(&mut session, target.location);
        let nearby: Vec<_> = session.nearby_treasures().iter().map(|t| t.id).collect();
        assert!(nearby.contains(&target.id));

        session.collect_treasure(target.id).unwrap();
        assert!(session.nearby_treasures().iter().all(|t| t.id != target.id));
    }

    #[test]
    fn reset_regenerates_and_zeroes() {
        let mut session = started(42);
        let target = session.treasures()[0].clone();
        let old_ids: Vec<_> = session.treasures().iter().map(|t| t.id).collect();

        walk_to(&mut session, target.location);
        session.collect_treasure(target.id).unwrap();
        session.select_obstacle(Some(session.obstacles()[0].id));
        assert!(session.stats().score > 0);

        session.reset();
        assert_eq!(session.stats().score, 0);
        assert_eq!(session.treasures().len(), 5);
        assert_eq!(session.obstacles().len(), 3);
        assert!(session.selected_obstacle().is_none());
        assert!(session.treasures().iter().all(|t| !t.found));
        for t in session.treasures() {
            assert!(!old_ids.contains(&t.id), "old id survived reset");
        }
    }

    #[test]
    fn zero_counts_spawn_nothing() {
        let mut cfg = SessionConfig::new(9);
        cfg.treasure_count = 0;
        cfg.obstacle_count = 0;
        let mut session = GameSession::new(cfg).unwrap();
        let update = session.update_location(FIX);
        assert_eq!(update, LocationUpdate::FirstFix { treasures: 0, obstacles: 0 });
    }

    #[test]
    fn same_seed_same_world() {
        let a = started(123);
        let b = started(123);
        assert_eq!(a.treasures(), b.treasures());
        assert_eq!(a.obstacles(), b.obstacles());

        let c = started(124);
        assert_ne!(a.treasures(), c.treasures());
    }

    #[test]
    fn distance_to_tracks_the_fix() {
        let mut session = GameSession::new(SessionConfig::new(2)).unwrap();
        assert!(session.distance_to(FIX.point).is_none());

        session.update_location(FIX);
        let target = session.treasures()[0].location;
        let d = session.distance_to(target).unwrap();
        assert!((50.0..=300.5).contains(&d), "{d}");
    }
}
