use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A single ply, described three ways.
///
/// All three fields describe the same ply: the coordinate form and the resulting position
/// can each be derived from the other given the position the move was played from. Moves
/// are only built by the rules, so a `Move` is never constructed from unrelated parts.
pub struct Move
{
    after: FenString,
    san:   SanString,
    uci:   UciString,
}

impl Move
{
    pub(crate) fn new(after: FenString, san: SanString, uci: UciString) -> Move
    {
        Move { after, san, uci }
    }

    /// The position reached once this move is played.
    pub fn position_after(&self) -> &FenString
    {
        &self.after
    }

    pub fn san(&self) -> &SanString
    {
        &self.san
    }

    pub fn uci(&self) -> &UciString
    {
        &self.uci
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} ({})", self.san, self.uci)
    }
}
