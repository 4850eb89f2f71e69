use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

lazy_static! {
    static ref FEN_RE: Regex = Regex::new(
        r"^(?<placement>[pnbrqkPNBRQK1-8]+(/[pnbrqkPNBRQK1-8]+){7}) (?<turn>[wb]) (?<castling>-|[KQkqA-Ha-h]{1,4}) (?<ep>-|[a-h][36]) (?<halfmove>[0-9]+) (?<fullmove>[1-9][0-9]*)$"
    )
    .unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Represents a syntactically-valid FEN record.
///
/// A FEN carries everything needed to generate legal moves: placement, side to move,
/// castling rights, en-passant target and both move counters. Whether the described
/// position can actually arise is a question for the rules.
pub struct FenString(pub(crate) String);

impl FenString
{
    /// The standard initial position.
    pub fn start() -> FenString
    {
        FenString(STARTING_FEN.into())
    }

    /// The fullmove number, which starts at 1 and increments after each black move.
    pub fn fullmove(&self) -> u32
    {
        self.field(5).parse::<u32>().unwrap_or(1)
    }

    /// Whether white is the side to move.
    pub fn white_to_move(&self) -> bool
    {
        self.field(1) == "w"
    }

    fn field(&self, n: usize) -> &str
    {
        self.0.split(' ').nth(n).unwrap_or("")
    }
}

impl Default for FenString
{
    fn default() -> Self
    {
        FenString::start()
    }
}

impl FromStr for FenString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let mut fields = s.split_whitespace().collect::<Vec<_>>();

        // EPD-style records omit the clocks.
        if fields.len() == 4
        {
            fields.extend(["0", "1"]);
        }

        let normalized = fields.join(" ");
        let Some(caps) = FEN_RE.captures(&normalized)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        for rank in caps["placement"].split('/')
        {
            let width: u32 = rank.chars().map(|ch| ch.to_digit(10).unwrap_or(1)).sum();
            if width != 8
            {
                let err = Error::new(Kind::ParseError, format!("Rank '{}' does not cover 8 files.", rank));
                return Err(err.chain_parse::<Self>(s.into()));
            }
        }

        Ok(FenString(normalized))
    }
}

impl AsRef<str> for FenString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for FenString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
