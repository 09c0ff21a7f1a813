#[cfg(feature = "std")]
mod cli_tests {
    use broadside::ui::{
        coord_to_string, parse_coord, parse_placement, parse_setup_input, render_board,
        render_fleet, SetupInput,
    };
    use broadside::{level_from, place, Board, Fleet, Orientation, Position, Ship, SHIPS};
    use log::LevelFilter;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1"), Ok(pos(0, 0)));
        assert_eq!(parse_coord("j10"), Ok(pos(9, 9)));
        assert_eq!(parse_coord(" c7 "), Ok(pos(6, 2)));
        assert!(parse_coord("").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("5A").is_err());
        assert!(parse_coord("Ax").is_err());
    }

    #[test]
    fn test_coord_to_string_roundtrip() {
        for r in 0..10 {
            for c in 0..10 {
                let p = pos(r, c);
                assert_eq!(parse_coord(&coord_to_string(p)), Ok(p));
            }
        }
        assert_eq!(coord_to_string(pos(6, 1)), "B7");
    }

    #[test]
    fn test_parse_placement() {
        let h = Orientation::Horizontal;
        assert_eq!(parse_placement("c3 v", h), Ok((pos(2, 2), Orientation::Vertical)));
        assert_eq!(parse_placement("A5 H", Orientation::Vertical), Ok((pos(4, 0), h)));
        assert_eq!(parse_placement("A5", h), Ok((pos(4, 0), h)));
        assert_eq!(
            parse_placement("A5", Orientation::Vertical),
            Ok((pos(4, 0), Orientation::Vertical))
        );
        assert!(parse_placement("A5 X", h).is_err());
        assert!(parse_placement("   ", h).is_err());
    }

    #[test]
    fn test_parse_setup_input() {
        let h = Orientation::Horizontal;
        let v = Orientation::Vertical;
        assert_eq!(parse_setup_input("", h), Ok(SetupInput::RandomRest));
        assert_eq!(parse_setup_input("  ", v), Ok(SetupInput::RandomRest));
        assert_eq!(parse_setup_input("r", h), Ok(SetupInput::Rotate(v)));
        assert_eq!(parse_setup_input("R", v), Ok(SetupInput::Rotate(h)));
        assert_eq!(parse_setup_input("b2", v), Ok(SetupInput::Place(pos(1, 1), v)));
        assert_eq!(parse_setup_input("b2 h", v), Ok(SetupInput::Place(pos(1, 1), h)));
        assert!(parse_setup_input("z9", h).is_err());
    }

    #[test]
    fn test_render_hides_ships_unless_revealed() {
        let ship = Ship::new(SHIPS[4]);
        let board = place(&Board::new(), &ship, pos(0, 0), Orientation::Horizontal)
            .unwrap()
            .board;
        let hidden = render_board(&board, false);
        let shown = render_board(&board, true);
        assert!(!hidden.contains(" S"));
        assert!(shown.contains(" S S"));
        assert_eq!(hidden.lines().count(), shown.lines().count());

        let fleet = Fleet::new();
        let listing = render_fleet(&fleet);
        assert!(listing.contains("Carrier (5): Not placed"));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" warn ")), LevelFilter::Warn);
        assert_eq!(level_from(Some("nonsense")), LevelFilter::Info);
        assert_eq!(level_from(None), LevelFilter::Info);
    }
}
