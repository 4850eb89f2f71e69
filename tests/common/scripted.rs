use openings::prelude::*;
use shakmaty::{fen::Fen, uci::Uci, CastlingMode, Chess, Position};

type Script = Box<dyn FnMut(&FenString, usize) -> Result<Vec<String>> + Send>;

/// An in-process engine that answers queries from a script.
///
/// It tracks its position the way a real engine does, from a reset position plus the
/// applied moves, and records every query so tests can check what it was asked.
pub struct ScriptedEngine
{
    start:       FenString,
    moves:       Vec<UciString>,
    script:      Script,
    pub queries: Vec<FenString>,
    pub resyncs: usize,
}

impl ScriptedEngine
{
    pub fn new(script: impl FnMut(&FenString, usize) -> Result<Vec<String>> + Send + 'static) -> Self
    {
        ScriptedEngine {
            start:   FenString::start(),
            moves:   Vec::new(),
            script:  Box::new(script),
            queries: Vec::new(),
            resyncs: 0,
        }
    }

    /// Always suggests the same moves, whatever the position.
    pub fn always(moves: &[&str]) -> Self
    {
        let moves = moves.iter().map(|m| m.to_string()).collect::<Vec<_>>();
        ScriptedEngine::new(move |_, n| Ok(moves.iter().take(n).cloned().collect()))
    }

    /// Suggests the first legal moves in coordinate order, which is deterministic.
    pub fn first_legal() -> Self
    {
        ScriptedEngine::new(|position, n| Ok(legal_moves(position).into_iter().take(n).collect()))
    }

    /// Behaves like `first_legal`, but fails the given (0-based) query.
    pub fn failing_on(query: usize) -> Self
    {
        let mut count = 0;
        ScriptedEngine::new(move |position, n| {
            count += 1;
            if count - 1 == query
            {
                return Err(Error::engine("engine exited unexpectedly"));
            }
            Ok(legal_moves(position).into_iter().take(n).collect())
        })
    }

    /// The position the engine currently stands in.
    pub fn position(&self) -> FenString
    {
        self.moves.iter().fold(self.start.clone(), |fen, uci| Standard.position_after(&fen, uci).unwrap())
    }
}

impl Engine for ScriptedEngine
{
    fn reset_to(&mut self, position: &FenString) -> Result<()>
    {
        self.start = position.clone();
        self.moves.clear();
        Ok(())
    }

    fn apply(&mut self, uci: &UciString) -> Result<()>
    {
        self.moves.push(uci.clone());
        Ok(())
    }

    fn top_candidates(&mut self, n: usize) -> Result<Vec<Candidate>>
    {
        let position = self.position();
        self.queries.push(position.clone());

        let moves = (self.script)(&position, n)?;
        moves
            .into_iter()
            .map(|m| {
                m.parse::<UciString>().map(|uci| Candidate {
                    uci,
                    score: Some(Score::Centipawns(0)),
                })
            })
            .collect()
    }

    fn resync(&mut self) -> Result<()>
    {
        self.resyncs += 1;
        self.moves.clear();
        Ok(())
    }
}

/// Every legal move in a position, in coordinate notation, sorted.
pub fn legal_moves(position: &FenString) -> Vec<String>
{
    let pos: Chess = position.as_ref().parse::<Fen>().unwrap().into_position(CastlingMode::Standard).unwrap();
    let mut moves = pos
        .legal_moves()
        .iter()
        .map(|m| Uci::from_move(m, CastlingMode::Standard).to_string())
        .collect::<Vec<_>>();
    moves.sort();
    moves
}
