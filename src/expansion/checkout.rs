use crate::prelude::*;

/// Exclusive use of an engine for one line's replay and query.
///
/// Opening a checkout resets the engine to the line's start; the rules side is tracked
/// as an explicit position alongside it. Dropping the checkout resets the engine again,
/// however the replay ended, so nothing from this line leaks into the next one.
pub struct Checkout<'a, R: Rules, E: Engine>
{
    rules:    &'a R,
    engine:   &'a mut E,
    home:     FenString,
    position: FenString,
    ply:      usize,
}

impl<'a, R: Rules, E: Engine> Checkout<'a, R, E>
{
    pub fn open(rules: &'a R, engine: &'a mut E, start: &FenString) -> Result<Self>
    {
        engine.reset_to(start)?;
        Ok(Checkout {
            rules,
            engine,
            home: start.clone(),
            position: start.clone(),
            ply: 0,
        })
    }

    /// Plays a recorded move on both sides, after checking it still holds in the current position.
    pub fn apply(&mut self, mv: &Move) -> Result<()>
    {
        self.ply += 1;
        let corrupt = |detail: String| Error::new(Kind::CorruptLine, format!("ply {}: {}", self.ply, detail));

        let replayed = self
            .rules
            .legal_notation_for(&self.position, mv.uci().as_ref())
            .map_err(|err| err.chain(corrupt(format!("recorded move {} no longer replays", mv))))?;

        if replayed.position_after() != mv.position_after()
        {
            return Err(corrupt(format!(
                "recorded move {} leads to '{}', expected '{}'",
                mv,
                replayed.position_after(),
                mv.position_after()
            )));
        }

        self.engine.apply(mv.uci())?;
        self.position = replayed.position_after().clone();
        Ok(())
    }

    /// The position both sides currently stand in.
    pub fn position(&self) -> &FenString
    {
        &self.position
    }

    /// Asks the engine for its best continuations here.
    pub fn top_candidates(&mut self, n: usize) -> Result<Vec<Candidate>>
    {
        self.engine.top_candidates(n)
    }
}

impl<'a, R: Rules, E: Engine> Drop for Checkout<'a, R, E>
{
    fn drop(&mut self)
    {
        if let Err(err) = self.engine.reset_to(&self.home)
        {
            log::warn!("could not reset engine after replay:\n{}", err);
        }
    }
}
