use crate::prelude::*;

mod checkout;
mod parallel;

pub use checkout::Checkout;
pub use parallel::expand_parallel;

#[derive(Clone, Debug)]
/// A line that was left out of an expansion round.
pub struct Dropped
{
    /// Its index in the input forest.
    pub index: usize,
    pub line:  Line,
    pub error: Error,
}

#[derive(Clone, Debug, Default)]
/// The result of one expansion round.
pub struct Expansion
{
    pub forest:  Forest,
    pub dropped: Vec<Dropped>,
}

/// Grows forests by asking an engine for the best continuations of every line.
///
/// An expander owns one rules instance and one engine, and processes lines strictly one
/// after the other. To expand in parallel, use several expanders (see `expand_parallel`).
pub struct Expander<R: Rules, E: Engine>
{
    rules:    R,
    engine:   E,
    desynced: bool,
}

impl<R: Rules, E: Engine> Expander<R, E>
{
    pub fn new(rules: R, engine: E) -> Self
    {
        Expander {
            rules,
            engine,
            desynced: false,
        }
    }

    pub fn engine(&self) -> &E
    {
        &self.engine
    }

    /// Returns a new forest holding, for each line, one child per engine candidate.
    pub fn expand(&mut self, forest: &Forest, factor: usize) -> Result<Forest>
    {
        self.expand_detailed(forest, factor).map(|expansion| expansion.forest)
    }

    /// Like `expand`, but also reports the lines that had to be left out.
    ///
    /// A line that no longer replays is dropped with a `CorruptLine` error and the round
    /// carries on. Engine failures end the round, and the engine is resynchronized before
    /// the next one.
    pub fn expand_detailed(&mut self, forest: &Forest, factor: usize) -> Result<Expansion>
    {
        if factor == 0
        {
            return Err(Error::new(Kind::InvalidOption, "The expansion factor must be at least 1.".into()));
        }

        if self.desynced
        {
            self.engine.resync()?;
            self.desynced = false;
        }

        log::info!("expanding {} lines by {}", forest.len(), factor);

        let mut children = Vec::with_capacity(forest.len() * factor);
        let mut dropped = Vec::new();

        for (index, line) in forest.iter().enumerate()
        {
            log::debug!("starting line {} of {}: {}", index + 1, forest.len(), line);

            match self.branch(line, factor)
            {
                | Ok(branches) =>
                {
                    if branches.len() < factor
                    {
                        log::debug!("line {} has only {} continuations", index + 1, branches.len());
                    }
                    children.extend(branches);
                }
                | Err(err) if err.fatal() =>
                {
                    self.desynced = true;
                    log::error!("aborting expansion at line {}:\n{}", index + 1, err);
                    return Err(err);
                }
                | Err(error) =>
                {
                    log::warn!("dropping line {} ({}):\n{}", index + 1, line, error);
                    dropped.push(Dropped {
                        index,
                        line: line.clone(),
                        error,
                    });
                }
            }
        }

        log::info!("{} lines after expansion", children.len());
        Ok(Expansion {
            forest: Forest::new(children),
            dropped,
        })
    }

    /// Forces a resync before the next round, for failures that never reached `expand_detailed`.
    pub(crate) fn mark_desynced(&mut self)
    {
        self.desynced = true;
    }

    pub fn rules(&self) -> &R
    {
        &self.rules
    }

    /// Replays a line, queries the engine, and builds one child line per candidate.
    fn branch(&mut self, line: &Line, factor: usize) -> Result<Vec<Line>>
    {
        let (position, candidates) = {
            let mut checkout = Checkout::open(&self.rules, &mut self.engine, line.start())?;
            for mv in line.iter()
            {
                checkout.apply(mv)?;
            }

            let candidates = checkout.top_candidates(factor)?;
            (checkout.position().clone(), candidates)
        };

        candidates
            .iter()
            .take(factor)
            .map(|candidate| {
                self.rules
                    .legal_notation_for(&position, candidate.uci.as_ref())
                    .map(|mv| line.push(mv))
                    .map_err(|err| err.chain(Error::engine(format!("engine suggested {} in '{}'", candidate.uci, position))))
            })
            .collect()
    }
}
