//! Unit tests for lem-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, RoomId, TunnelId};

    #[test]
    fn index_roundtrip() {
        let id = RoomId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RoomId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display_forms() {
        assert_eq!(RoomId(3).to_string(), "RoomId(3)");
        assert_eq!(TunnelId(0).to_string(), "TunnelId(0)");
        assert_eq!(AgentId(9).to_string(), "L10");
    }

    #[test]
    fn agent_labels_are_one_based() {
        assert_eq!(AgentId(0).label(), 1);
        assert_eq!(AgentId(0).to_string(), "L1");
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(RoomId(100) > RoomId(99));
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn display_matches_room_line_fields() {
        assert_eq!(Coord::new(2, -5).to_string(), "2 -5");
    }
}

#[cfg(test)]
mod turn {
    use crate::Turn;

    #[test]
    fn turn_counting() {
        assert_eq!(Turn::ZERO.next(), Turn(1));
        assert_eq!(Turn(3).next().next(), Turn(5));
        assert!(Turn(2) < Turn(5));
        assert_eq!(Turn(7).to_string(), "T7");
    }
}

#[cfg(test)]
mod config {
    use crate::{SelectionStrategy, SolverConfig};

    #[test]
    fn default_is_exhaustive_max_paths() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.max_paths, None);
        assert_eq!(cfg.max_turns, None);
        assert_eq!(cfg.strategy, SelectionStrategy::MaxPaths);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_caps_rejected() {
        let cfg = SolverConfig { max_paths: Some(0), ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = SolverConfig { max_turns: Some(0), ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn strategy_from_str() {
        assert_eq!("max-paths".parse::<SelectionStrategy>().unwrap(), SelectionStrategy::MaxPaths);
        assert_eq!("MIN_TURNS".parse::<SelectionStrategy>().unwrap(), SelectionStrategy::MinTurns);
        assert!("fastest".parse::<SelectionStrategy>().is_err());
        assert_eq!(SelectionStrategy::MinTurns.to_string(), "min-turns");
    }
}
