use std::sync::Arc;

use itertools::Itertools;

use crate::prelude::*;

/// One link of a line's move chain. Links are shared read-only between every line that
/// branched off after them.
struct Node
{
    mv:     Move,
    parent: Option<Arc<Node>>,
    ply:    usize,
}

#[derive(Clone)]
/// One opening variation: a starting position and the moves played from it.
///
/// Lines are persistent. `push` never touches the receiver, it returns a new line whose
/// prefix is the receiver's chain, so any number of children can branch off one parent
/// without copying it and without being able to see each other.
pub struct Line
{
    start: FenString,
    tail:  Option<Arc<Node>>,
}

impl Line
{
    /// Creates an empty line at the given starting position.
    pub fn new(start: FenString) -> Line
    {
        Line { start, tail: None }
    }

    /// The position this line currently stands in.
    pub fn current(&self) -> &FenString
    {
        match &self.tail
        {
            | Some(node) => node.mv.position_after(),
            | None => &self.start,
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.tail.is_none()
    }

    /// Iterates over the moves in the order they were played.
    pub fn iter(&self) -> std::vec::IntoIter<&Move>
    {
        self.moves().into_iter()
    }

    /// The most recent move, if any.
    pub fn last(&self) -> Option<&Move>
    {
        self.tail.as_ref().map(|node| &node.mv)
    }

    /// The number of plies in this line.
    pub fn len(&self) -> usize
    {
        self.tail.as_ref().map(|node| node.ply).unwrap_or(0)
    }

    /// Collects the moves in the order they were played.
    pub fn moves(&self) -> Vec<&Move>
    {
        let mut moves = Vec::with_capacity(self.len());
        let mut cursor = self.tail.as_deref();
        while let Some(node) = cursor
        {
            moves.push(&node.mv);
            cursor = node.parent.as_deref();
        }
        moves.reverse();
        moves
    }

    /// Returns a new line extending this one by a move; this line is left as it was.
    pub fn push(&self, mv: Move) -> Line
    {
        let node = Node {
            mv,
            parent: self.tail.clone(),
            ply: self.len() + 1,
        };

        Line {
            start: self.start.clone(),
            tail:  Some(Arc::new(node)),
        }
    }

    /// Whether this line and another share the storage of their first `ply` moves.
    pub fn shares_prefix(&self, other: &Line, ply: usize) -> bool
    {
        match (self.ancestor(ply), other.ancestor(ply))
        {
            | (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            | _ => false,
        }
    }

    pub fn start(&self) -> &FenString
    {
        &self.start
    }

    /// The coordinate form of every move, in order.
    pub fn uci_sequence(&self) -> Vec<UciString>
    {
        self.iter().map(|mv| mv.uci().clone()).collect()
    }

    fn ancestor(&self, ply: usize) -> Option<&Arc<Node>>
    {
        let mut cursor = self.tail.as_ref();
        while let Some(node) = cursor
        {
            if node.ply == ply
            {
                return Some(node);
            }
            cursor = node.parent.as_ref();
        }
        None
    }
}

impl Default for Line
{
    fn default() -> Self
    {
        Line::new(FenString::start())
    }
}

impl PartialEq for Line
{
    fn eq(&self, other: &Self) -> bool
    {
        self.start == other.start && self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Line {}

impl std::fmt::Debug for Line
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let moves = self.iter().map(|mv| mv.uci()).join(" ");
        write!(f, "Line({} | {})", self.start, moves)
    }
}

impl std::fmt::Display for Line
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let moves = self.iter().map(|mv| mv.san()).join(" ");
        write!(f, "{}", moves)
    }
}
