mod common;
use common::*;

#[cfg(test)]
mod notation
{
    use super::*;
    use openings::prelude::*;

    #[test]
    fn start_position()
    {
        let _setup = setup::setup();
        let start = FenString::start();
        assert_eq!(start.as_ref(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(start.white_to_move());
        assert_eq!(start.fullmove(), 1);
        assert_eq!(start, FenString::default());
    }

    #[test]
    fn fen_normalizes_whitespace_and_missing_clocks()
    {
        let _setup = setup::setup();
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR   b KQkq e3".parse::<FenString>().unwrap();
        assert_eq!(fen.as_ref(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        assert!(!fen.white_to_move());
    }

    #[test]
    fn fen_rejects_short_ranks()
    {
        let _setup = setup::setup();
        let err = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<FenString>().unwrap_err();
        assert_eq!(err.kind, Kind::ParseError);
    }

    #[test]
    fn fen_rejects_garbage()
    {
        let _setup = setup::setup();
        assert!("hello world".parse::<FenString>().is_err());
        assert!("8/8/8/8/8/8/8/8 x - - 0 1".parse::<FenString>().is_err());
    }

    #[test]
    fn san_shapes()
    {
        let _setup = setup::setup();
        for ok in ["e4", "exd5", "Nf3", "Nbd7", "R1e2", "Qh4xe1", "O-O", "O-O-O+", "e8=Q#", "axb8=N"]
        {
            assert!(ok.parse::<SanString>().is_ok(), "{} should parse", ok);
        }
        for bad in ["", "e9", "Zf3", "1.", "e2e4", "O-O-O-O", "O-0", "e8K"]
        {
            assert!(bad.parse::<SanString>().is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn san_other_spellings()
    {
        let _setup = setup::setup();
        for (written, canonical) in [
            ("0-0", "O-O"),
            ("0-0-0+", "O-O-O+"),
            ("e8Q", "e8=Q"),
            ("axb1N#", "axb1=N#"),
            ("a8=q", "a8=Q"),
            ("Nf3", "Nf3"),
        ]
        {
            assert_eq!(written.parse::<SanString>().unwrap().as_ref(), canonical);
        }
    }

    #[test]
    fn uci_shapes()
    {
        let _setup = setup::setup();
        for ok in ["e2e4", "e7e8q", "0000", "a1h8"]
        {
            assert!(ok.parse::<UciString>().is_ok(), "{} should parse", ok);
        }
        for bad in ["e4", "e2e9", "e7e8k", "E2E4"]
        {
            assert!(bad.parse::<UciString>().is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn parse_errors_name_the_type()
    {
        let _setup = setup::setup();
        let err = "x".parse::<UciString>().unwrap_err();
        assert_eq!(err.to_string(), "ParseError: 'x' is not a valid UciString.");
    }
}
