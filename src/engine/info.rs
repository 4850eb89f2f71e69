use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// The parts of a UCI `info` line that carry a principal variation.
pub struct PvInfo
{
    pub depth:   u32,
    pub multipv: usize,
    pub score:   Option<Score>,
    /// Set for `lowerbound`/`upperbound` scores, which only bracket the real evaluation.
    pub bound:   bool,
    pub first:   UciString,
}

impl PvInfo
{
    /// Parses an `info` line, returning `None` unless it names at least one pv move.
    pub fn parse(line: &str) -> Option<PvInfo>
    {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.first().copied() != Some("info")
        {
            return None;
        }

        let mut depth = 0;
        let mut multipv = 1;
        let mut score = None;
        let mut bound = false;

        let mut i = 1;
        while i < tokens.len()
        {
            match tokens[i]
            {
                | "depth" =>
                {
                    depth = tokens.get(i + 1)?.parse::<u32>().ok()?;
                    i += 1;
                }
                | "multipv" =>
                {
                    multipv = tokens.get(i + 1)?.parse::<usize>().ok()?;
                    i += 1;
                }
                | "score" =>
                {
                    let value = tokens.get(i + 2)?.parse::<i32>().ok()?;
                    score = match *tokens.get(i + 1)?
                    {
                        | "cp" => Some(Score::Centipawns(value)),
                        | "mate" => Some(Score::Mate(value)),
                        | _ => None,
                    };
                    i += 2;
                }
                | "lowerbound" | "upperbound" => bound = true,
                | "pv" =>
                {
                    let first = tokens.get(i + 1)?.parse::<UciString>().ok()?;
                    return Some(PvInfo {
                        depth,
                        multipv,
                        score,
                        bound,
                        first,
                    });
                }
                | "string" => return None,
                | _ =>
                {}
            }
            i += 1;
        }

        None
    }
}
