use crate::prelude::*;

mod info;
mod process;

pub use info::PvInfo;
pub use process::UciEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An evaluation from the side to move's point of view.
pub enum Score
{
    Centipawns(i32),
    /// Mate in this many moves; negative when the side to move is getting mated.
    Mate(i32),
}

impl std::fmt::Display for Score
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Score::Centipawns(cp) => write!(f, "{:+.2}", *cp as f64 / 100.0),
            | Score::Mate(n) => write!(f, "#{}", n),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One of the engine's suggested continuations.
pub struct Candidate
{
    pub uci:   UciString,
    /// Missing when the engine named a move without reporting a line for it.
    pub score: Option<Score>,
}

/// A stateful analysis engine.
///
/// An engine holds exactly one current position, built up by `reset_to` and `apply`.
/// Callers must not interleave two lines' worth of calls on one engine.
pub trait Engine
{
    /// Forgets all applied moves and stands in the given position.
    fn reset_to(&mut self, position: &FenString) -> Result<()>;

    /// Plays a move on top of the current position.
    fn apply(&mut self, uci: &UciString) -> Result<()>;

    /// The engine's best `n` continuations from the current position, best first.
    ///
    /// Fewer than `n` come back when the position has fewer legal moves.
    fn top_candidates(&mut self, n: usize) -> Result<Vec<Candidate>>;

    /// Brings the engine back to a known state after a failed exchange.
    fn resync(&mut self) -> Result<()>
    {
        Ok(())
    }
}

impl<E: Engine + ?Sized> Engine for Box<E>
{
    fn reset_to(&mut self, position: &FenString) -> Result<()>
    {
        (**self).reset_to(position)
    }

    fn apply(&mut self, uci: &UciString) -> Result<()>
    {
        (**self).apply(uci)
    }

    fn top_candidates(&mut self, n: usize) -> Result<Vec<Candidate>>
    {
        (**self).top_candidates(n)
    }

    fn resync(&mut self) -> Result<()>
    {
        (**self).resync()
    }
}
