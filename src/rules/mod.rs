use itertools::Itertools;

use crate::prelude::*;

mod standard;

pub use standard::Standard;

/// The authority on chess rules: legality, notation conversion and position derivation.
///
/// Every operation takes the position it applies to, and none of them keep state between
/// calls, so one instance can serve any number of lines.
pub trait Rules
{
    /// Builds the move a notation (algebraic or coordinate) denotes in a position.
    ///
    /// Fails with `IllegalMove` if the notation does not denote a legal move there.
    fn legal_notation_for(&self, position: &FenString, notation: &str) -> Result<Move>;

    /// Converts a coordinate move into algebraic notation, relative to the position it is played from.
    fn notation_san_for(&self, position: &FenString, uci: &UciString) -> Result<SanString>;

    /// The position reached by playing a coordinate move.
    fn position_after(&self, position: &FenString, uci: &UciString) -> Result<FenString>;

    /// Draws a position as a text diagram.
    fn render_board(&self, position: &FenString, white_perspective: bool) -> Result<String>;

    /// Re-derives the algebraic notation of every move in a line by replaying it from its start.
    fn san_sequence(&self, line: &Line) -> Result<Vec<SanString>>;

    /// The standard initial position.
    fn start(&self) -> FenString
    {
        FenString::start()
    }

    /// Renders a line with move numbers, e.g. `1. e4 e5 2. Nf3`, or `1... e5` if black moves first.
    fn render_line(&self, line: &Line) -> Result<String>
    {
        let sans = self.san_sequence(line)?;
        let mut number = line.start().fullmove();
        let mut white = line.start().white_to_move();

        let mut tokens = Vec::with_capacity(sans.len() * 3 / 2 + 1);
        for (i, san) in sans.iter().enumerate()
        {
            if white
            {
                tokens.push(format!("{}.", number));
            }
            else if i == 0
            {
                tokens.push(format!("{}...", number));
            }

            tokens.push(san.to_string());

            if !white
            {
                number += 1;
            }
            white = !white;
        }

        Ok(tokens.iter().join(" "))
    }
}

impl<R: Rules + ?Sized> Rules for &R
{
    fn legal_notation_for(&self, position: &FenString, notation: &str) -> Result<Move>
    {
        (**self).legal_notation_for(position, notation)
    }

    fn notation_san_for(&self, position: &FenString, uci: &UciString) -> Result<SanString>
    {
        (**self).notation_san_for(position, uci)
    }

    fn position_after(&self, position: &FenString, uci: &UciString) -> Result<FenString>
    {
        (**self).position_after(position, uci)
    }

    fn render_board(&self, position: &FenString, white_perspective: bool) -> Result<String>
    {
        (**self).render_board(position, white_perspective)
    }

    fn san_sequence(&self, line: &Line) -> Result<Vec<SanString>>
    {
        (**self).san_sequence(line)
    }

    fn start(&self) -> FenString
    {
        (**self).start()
    }

    fn render_line(&self, line: &Line) -> Result<String>
    {
        (**self).render_line(line)
    }
}
