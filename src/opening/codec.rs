use itertools::Itertools;

use crate::prelude::*;

/// Converts forests to and from newline-delimited algebraic notation.
///
/// Each text line is one line of play, e.g. `e4 e5 Nf3`. Move-number tokens (anything
/// containing a period) are ignored when reading and only written when asked for.
pub struct Codec<R: Rules>
{
    rules:    R,
    start:    FenString,
    numbered: bool,
}

#[derive(Clone, Debug)]
/// A text line that could not be turned into a line of play.
pub struct Failure
{
    /// The 1-based number of the offending text line.
    pub line_number: usize,
    pub error:       Error,
}

#[derive(Clone, Debug)]
/// The outcome of reading a text: everything that parsed, plus what didn't.
pub struct Decoded
{
    pub forest:   Forest,
    pub failures: Vec<Failure>,
}

impl<R: Rules> Codec<R>
{
    pub fn new(rules: R) -> Self
    {
        let start = rules.start();
        Codec {
            rules,
            start,
            numbered: false,
        }
    }

    /// Whether to write move numbers.
    pub fn numbered(mut self, numbered: bool) -> Self
    {
        self.numbered = numbered;
        self
    }

    /// Sets the position every decoded line starts from.
    pub fn with_start(mut self, start: FenString) -> Self
    {
        self.start = start;
        self
    }

    /// Reads one text line into a line of play.
    pub fn decode_line(&self, text: &str) -> Result<Line>
    {
        let mut line = Line::new(self.start.clone());

        for token in text.split_whitespace().filter(|token| !token.contains('.'))
        {
            let mv = self
                .rules
                .legal_notation_for(line.current(), token)
                .map_err(|err| err.chain_parse::<Line>(text.into()))?;
            line = line.push(mv);
        }

        Ok(line)
    }

    /// Reads a whole text. A text line that fails to parse is reported and skipped.
    pub fn deserialize(&self, text: &str) -> Decoded
    {
        let lines = text.lines().collect::<Vec<_>>();
        let mut forest = Vec::with_capacity(lines.len());
        let mut failures = Vec::new();

        for (i, raw) in lines.iter().enumerate()
        {
            log::trace!("loading {} of {} lines", i + 1, lines.len());
            match self.decode_line(raw)
            {
                | Ok(line) => forest.push(line),
                | Err(error) =>
                {
                    log::warn!("skipping text line {}:\n{}", i + 1, error);
                    failures.push(Failure {
                        line_number: i + 1,
                        error,
                    });
                }
            }
        }

        let forest = Forest::new(forest);
        if forest.len() > 1 && forest.depth().is_none()
        {
            log::warn!("loaded lines do not share a common depth");
        }

        log::info!("loaded {} lines ({} skipped)", forest.len(), failures.len());
        Decoded { forest, failures }
    }

    /// Writes one line of play.
    pub fn encode_line(&self, line: &Line) -> Result<String>
    {
        match self.numbered
        {
            | true => self.rules.render_line(line),
            | false => Ok(self.rules.san_sequence(line)?.iter().join(" ")),
        }
    }

    /// Writes a forest, one line of play per text line.
    pub fn serialize(&self, forest: &Forest) -> Result<String>
    {
        let mut text = String::new();
        for line in forest
        {
            text.push_str(&self.encode_line(line)?);
            text.push('\n');
        }
        Ok(text)
    }
}
