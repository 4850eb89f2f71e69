mod common;
use common::*;

#[cfg(test)]
mod codec
{
    use openings::prelude::*;
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    use super::*;

    #[test]
    fn serialize_plain()
    {
        let _setup = setup::setup();
        let forest = templates::forest_of(&["e4 e5"]);
        assert_eq!(Codec::new(Standard).serialize(&forest).unwrap(), "e4 e5\n");
    }

    #[test]
    fn serialize_numbered()
    {
        let _setup = setup::setup();
        let forest = templates::forest_of(&["e4 e5 Nf3", "d4"]);
        let text = Codec::new(Standard).numbered(true).serialize(&forest).unwrap();
        assert_eq!(text, "1. e4 e5 2. Nf3\n1. d4\n");
    }

    #[test]
    fn deserialize_plain()
    {
        let _setup = setup::setup();
        let decoded = Codec::new(Standard).deserialize("e4 e5\n");
        assert!(decoded.failures.is_empty());
        assert_eq!(decoded.forest, templates::forest_of(&["e4 e5"]));

        let line = &decoded.forest.lines()[0];
        assert_eq!(templates::ucis(line), vec!["e2e4", "e7e5"]);
    }

    #[test]
    fn move_numbers_are_ignored()
    {
        let _setup = setup::setup();
        let decoded = Codec::new(Standard).deserialize("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6\n1.d4\n");
        assert!(decoded.failures.is_empty());
        assert_eq!(decoded.forest.len(), 2);
        assert_eq!(templates::sans(&decoded.forest.lines()[0]), vec!["e4", "e5", "Nf3", "Nc6", "Bb5", "a6"]);
        assert!(decoded.forest.lines()[1].is_empty());
    }

    #[test]
    fn zero_castling_and_bare_promotions()
    {
        let _setup = setup::setup();
        let decoded = Codec::new(Standard).deserialize("1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. 0-0\n");
        assert!(decoded.failures.is_empty());
        assert_eq!(templates::ucis(&decoded.forest.lines()[0]).last().unwrap(), "e1g1");

        let start = "8/P7/8/8/8/8/8/k6K w - - 0 1".parse::<FenString>().unwrap();
        let codec = Codec::new(Standard).with_start(start);
        let decoded = codec.deserialize("a8Q\na8=q\n");
        assert!(decoded.failures.is_empty());
        for line in decoded.forest.iter()
        {
            assert_eq!(templates::ucis(line), vec!["a7a8q"]);
            assert_eq!(templates::sans(line), vec!["a8=Q+"]);
        }
        assert_eq!(codec.serialize(&decoded.forest).unwrap(), "a8=Q+\na8=Q+\n");
    }

    #[test]
    fn illegal_line_fails_alone()
    {
        let _setup = setup::setup();
        let text = "e4 e5\ne4 e4\nd4 d5\n";
        let decoded = Codec::new(Standard).deserialize(text);

        assert_eq!(decoded.forest.len(), 2);
        assert!(decoded.forest.same_lines(&templates::forest_of(&["e4 e5", "d4 d5"])));

        assert_eq!(decoded.failures.len(), 1);
        assert_eq!(decoded.failures[0].line_number, 2);
        assert_eq!(decoded.failures[0].error.kind, Kind::ParseError);
    }

    #[test]
    fn garbage_token_is_a_parse_error()
    {
        let _setup = setup::setup();
        let err = Codec::new(Standard).decode_line("e4 banana").unwrap_err();
        assert_eq!(err.kind, Kind::ParseError);
    }

    #[test]
    fn blank_lines_are_empty_lines()
    {
        let _setup = setup::setup();
        let codec = Codec::new(Standard);

        assert!(codec.deserialize("").forest.is_empty());

        let decoded = codec.deserialize("\n");
        assert_eq!(decoded.forest.len(), 1);
        assert!(decoded.forest.lines()[0].is_empty());

        let seeded = Forest::seed(FenString::start());
        assert_eq!(codec.serialize(&seeded).unwrap(), "\n");
        assert_eq!(codec.deserialize(&codec.serialize(&seeded).unwrap()).forest, seeded);
    }

    #[test]
    fn crlf_and_extra_spaces()
    {
        let _setup = setup::setup();
        let decoded = Codec::new(Standard).deserialize("e4   e5\r\nc4\t e5\r\n");
        assert!(decoded.failures.is_empty());
        assert!(decoded.forest.same_lines(&templates::forest_of(&["e4 e5", "c4 e5"])));
    }

    #[test]
    fn custom_start()
    {
        let _setup = setup::setup();
        let after_e4 = templates::line_of("e4");
        let codec = Codec::new(Standard).with_start(after_e4.current().clone());

        let decoded = codec.deserialize("c5 Nf3\n");
        assert!(decoded.failures.is_empty());
        let line = &decoded.forest.lines()[0];
        assert_eq!(line.start(), after_e4.current());
        assert_eq!(templates::ucis(line), vec!["c7c5", "g1f3"]);
    }

    #[test]
    fn notation_normalizes_on_write()
    {
        let _setup = setup::setup();
        let codec = Codec::new(Standard);
        // Coordinate tokens and redundant disambiguation are accepted, but written canonically.
        let decoded = codec.deserialize("e2e4 e7e5 Ng1f3\n");
        assert!(decoded.failures.is_empty(), "{:?}", decoded.failures);
        assert_eq!(codec.serialize(&decoded.forest).unwrap(), "e4 e5 Nf3\n");
    }

    /// Plays random legal moves to build a forest of uneven lines.
    fn random_forest(rng: &mut StdRng) -> Forest
    {
        let lines = rng.gen_range(1..6);
        (0..lines)
            .map(|_| {
                let plies = rng.gen_range(0..24);
                let mut line = Line::default();
                for _ in 0..plies
                {
                    let moves = scripted::legal_moves(line.current());
                    let Some(uci) = moves.choose(&mut *rng)
                    else
                    {
                        break;
                    };
                    let mv = Standard.legal_notation_for(line.current(), uci).unwrap();
                    line = line.push(mv);
                }
                line
            })
            .collect()
    }

    #[test]
    fn round_trip_preserves_move_sequences()
    {
        let _setup = setup::setup();
        let mut rng = StdRng::seed_from_u64(0x0e4e5);

        for numbered in [false, true]
        {
            let codec = Codec::new(Standard).numbered(numbered);
            for _ in 0..40
            {
                let forest = random_forest(&mut rng);
                let text = codec.serialize(&forest).unwrap();
                let decoded = codec.deserialize(&text);

                assert!(decoded.failures.is_empty(), "{}\n{:?}", text, decoded.failures);
                assert!(decoded.forest.same_lines(&forest), "{}", text);
            }
        }
    }
}
