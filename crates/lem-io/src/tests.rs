//! Unit tests for lem-io.

// ── Helpers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod helpers {
    /// Single corridor: four agents, start → 1 → 2 → end.
    pub const CORRIDOR: &str = "\
4
##start
0 0 3
2 2 5
##end
3 4 0
1 1 1
0-1
2-3
1-2
";

    /// Two disjoint routes plus comments and blank lines.
    pub const TWIN: &str = "\
# two routes
3

##start
s 0 0
a1 1 1
a2 2 1
#a comment
b1 1 -1
b2 2 -1
##end
e 3 0
s-a1
a1-a2
a2-e
s-b1
b1-b2
b2-e
";
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use lem_core::Coord;

    use super::helpers::{CORRIDOR, TWIN};
    use crate::{ParseError, parse_colony_str};

    #[test]
    fn corridor_parses() {
        let c = parse_colony_str(CORRIDOR).unwrap();
        assert_eq!(c.agent_count(), 4);
        assert_eq!(c.room_count(), 4);
        assert_eq!(c.tunnel_count(), 3);
        assert_eq!(c.name(c.start()), "0");
        assert_eq!(c.name(c.end()), "3");
        let two = c.room_id("2").unwrap();
        assert_eq!(c.room(two).unwrap().coord, Coord::new(2, 5));
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let c = parse_colony_str(TWIN).unwrap();
        assert_eq!(c.agent_count(), 3);
        assert_eq!(c.room_count(), 6);
        assert_eq!(c.tunnel_count(), 6);
        let b1 = c.room_id("b1").unwrap();
        assert_eq!(c.room(b1).unwrap().coord, Coord::new(1, -1));
    }

    #[test]
    fn other_double_hash_lines_are_comments() {
        let c = parse_colony_str("1\n##note\n##start\ns 0 0\n##end\ne 1 0\ns-e\n").unwrap();
        assert_eq!(c.room_count(), 2);
    }

    #[test]
    fn duplicate_tunnel_ignored() {
        let c = parse_colony_str("1\n##start\ns 0 0\n##end\ne 1 0\ns-e\ne-s\ns-e\n").unwrap();
        assert_eq!(c.tunnel_count(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_colony_str(""), Err(ParseError::MissingAgentCount)));
        assert!(matches!(parse_colony_str("# only\n\n"), Err(ParseError::MissingAgentCount)));
    }

    #[test]
    fn bad_agent_counts() {
        for text in ["0\n", "-3\n", "many\n", "##start\ns 0 0\n"] {
            assert!(
                matches!(parse_colony_str(text), Err(ParseError::InvalidAgentCount { line: 1, .. })),
                "{text:?}"
            );
        }
    }

    #[test]
    fn malformed_rooms() {
        let err = parse_colony_str("1\nroom 1\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRoom { line: 2, .. }));
        let err = parse_colony_str("1\nroom 1 2 3\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRoom { line: 2, .. }));
        let err = parse_colony_str("1\nroom 1 y\n").unwrap_err();
        assert!(matches!(err, ParseError::BadCoordinate { line: 2, ref text } if text == "y"));
    }

    #[test]
    fn invalid_room_names() {
        for name in ["Lroom", "a-b"] {
            let err = parse_colony_str(&format!("1\n{name} 0 0\n")).unwrap_err();
            assert!(matches!(err, ParseError::InvalidRoomName { line: 2, .. }), "{name}");
        }
    }

    #[test]
    fn duplicate_room_rejected() {
        let err = parse_colony_str("1\n##start\ns 0 0\n##end\ns 1 1\n").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateRoom { line: 5, ref name } if name == "s"));
    }

    #[test]
    fn tunnel_errors() {
        let base = "1\n##start\ns 0 0\n##end\ne 1 0\n";
        let err = parse_colony_str(&format!("{base}s-x\n")).unwrap_err();
        assert!(matches!(err, ParseError::UnknownRoom { line: 6, ref name } if name == "x"));
        let err = parse_colony_str(&format!("{base}s-s\n")).unwrap_err();
        assert!(matches!(err, ParseError::SelfLoop { line: 6, .. }));
        let err = parse_colony_str(&format!("{base}s-e-s\n")).unwrap_err();
        assert!(matches!(err, ParseError::MalformedTunnel { line: 6, .. }));
        let err = parse_colony_str(&format!("{base}s-\n")).unwrap_err();
        assert!(matches!(err, ParseError::MalformedTunnel { line: 6, .. }));
    }

    #[test]
    fn markers() {
        let err = parse_colony_str("1\n##start\ns 0 0\n##start\nt 0 1\n").unwrap_err();
        assert!(matches!(err, ParseError::RepeatedMarker { line: 4, marker: "##start" }));
        let err = parse_colony_str("1\n##start\n##end\ne 1 0\n").unwrap_err();
        assert!(matches!(err, ParseError::MarkerWithoutRoom { line: 2, marker: "##start" }));
        let err = parse_colony_str("1\n##start\ns 0 0\n##end\n").unwrap_err();
        assert!(matches!(err, ParseError::MarkerWithoutRoom { line: 4, marker: "##end" }));
    }

    #[test]
    fn missing_start_or_end() {
        let err = parse_colony_str("1\n##end\ne 1 0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingStart));
        let err = parse_colony_str("1\n##start\ns 0 0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingEnd));
    }

    #[test]
    fn unrecognised_line() {
        let err = parse_colony_str("1\n##start\ns 0 0\n##end\ne 1 0\nhello\n").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognisedLine { line: 6, ref text } if text == "hello"));
    }

    #[test]
    fn error_messages_carry_line_numbers() {
        let err = parse_colony_str("1\nroom 1\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: malformed room \"room 1\"");
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use lem_core::SolverConfig;
    use lem_paths::enumerate_paths;
    use lem_sim::{NoopObserver, solve};

    use super::helpers::{CORRIDOR, TWIN};
    use crate::{parse_colony_str, render_colony, render_moves, render_paths, render_turn};

    #[test]
    fn colony_echo_is_canonical() {
        let c = parse_colony_str(CORRIDOR).unwrap();
        assert_eq!(
            render_colony(&c),
            "4\n##start\n0 0 3\n2 2 5\n##end\n3 4 0\n1 1 1\n0-1\n2-3\n1-2\n"
        );
    }

    #[test]
    fn echo_parses_back_to_same_colony() {
        let c = parse_colony_str(TWIN).unwrap();
        let again = parse_colony_str(&render_colony(&c)).unwrap();
        assert_eq!(render_colony(&again), render_colony(&c));
    }

    #[test]
    fn corridor_moves() {
        let c = parse_colony_str(CORRIDOR).unwrap();
        let sol = solve(&c, &SolverConfig::default(), &mut NoopObserver).unwrap();
        assert_eq!(
            render_moves(&c, &sol.log),
            "L1-1\nL1-2 L2-1\nL1-3 L2-2 L3-1\nL2-3 L3-2 L4-1\nL3-3 L4-2\nL4-3\n"
        );
        assert_eq!(render_turn(&c, &sol.log.turns[1].moves), "L1-2 L2-1");
        assert_eq!(render_turn(&c, &[]), "");
    }

    #[test]
    fn unreachable_end_renders_nothing() {
        let c = parse_colony_str("2\n##start\ns 0 0\nx 1 1\n##end\ne 2 2\ns-x\n").unwrap();
        let sol = solve(&c, &SolverConfig::default(), &mut NoopObserver).unwrap();
        assert_eq!(render_moves(&c, &sol.log), "");
    }

    #[test]
    fn path_listing() {
        let c = parse_colony_str(TWIN).unwrap();
        let paths = enumerate_paths(&c);
        assert_eq!(
            render_paths(&c, "All paths:", &paths),
            "All paths:\nPath 1: [s a1 a2 e]\nPath 2: [s b1 b2 e]\n"
        );
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writers {
    use std::io::{self, Write};

    use lem_core::SolverConfig;
    use lem_sim::{NoopObserver, solve};

    use super::helpers::{CORRIDOR, TWIN};
    use crate::{CsvMoveWriter, OutputError, TurnPrinter, parse_colony_file, parse_colony_str, render_moves};

    #[test]
    fn printer_streams_same_lines_as_render() {
        let c = parse_colony_str(TWIN).unwrap();
        let mut printer = TurnPrinter::new(&c, Vec::new());
        let sol = solve(&c, &SolverConfig::default(), &mut printer).unwrap();
        assert!(printer.take_error().is_none());
        assert_eq!(printer.lines(), sol.log.turn_count());
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, render_moves(&c, &sol.log));
        assert_eq!(text, "L1-a1 L2-b1\nL1-a2 L2-b2 L3-a1\nL1-e L2-e L3-a2\nL3-e\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn printer_keeps_first_error() {
        let c = parse_colony_str(CORRIDOR).unwrap();
        let mut printer = TurnPrinter::new(&c, Broken);
        solve(&c, &SolverConfig::default(), &mut printer).unwrap();
        assert_eq!(printer.lines(), 0);
        assert!(matches!(printer.take_error(), Some(OutputError::Io(_))));
        assert!(printer.take_error().is_none());
    }

    #[test]
    fn csv_rows_in_memory() {
        let c = parse_colony_str(CORRIDOR).unwrap();
        let sol = solve(&c, &SolverConfig::default(), &mut NoopObserver).unwrap();
        let mut w = CsvMoveWriter::from_writer(Vec::new()).unwrap();
        w.write_log(&c, &sol.log).unwrap();
        assert_eq!(w.rows_written(), 12);
        let text = String::from_utf8(w.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "turn,agent,room");
        assert_eq!(lines[1], "1,1,1");
        assert_eq!(lines[2], "2,1,2");
        assert_eq!(lines[3], "2,2,1");
        assert_eq!(lines.last(), Some(&"6,4,3"));
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn csv_file_and_colony_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("corridor.txt");
        std::fs::write(&map, CORRIDOR).unwrap();
        let c = parse_colony_file(&map).unwrap();

        let sol = solve(&c, &SolverConfig::default(), &mut NoopObserver).unwrap();
        let out = dir.path().join("moves.csv");
        let mut w = CsvMoveWriter::create(&out).unwrap();
        w.write_log(&c, &sol.log).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut reader = csv::Reader::from_path(&out).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(&rows[11][2], "3");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_colony_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, crate::ParseError::Io(_)));
    }
}
