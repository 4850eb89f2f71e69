use multiset::HashMultiSet;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Every known line at the current expansion depth.
///
/// A forest is a value: expansion reads one and returns the next, so older forests stay
/// valid snapshots of earlier rounds.
pub struct Forest
{
    lines: Vec<Line>,
}

impl Forest
{
    pub fn new(lines: Vec<Line>) -> Forest
    {
        Forest { lines }
    }

    /// A forest holding a single empty line at the given position.
    pub fn seed(start: FenString) -> Forest
    {
        Forest::new(vec![Line::new(start)])
    }

    /// The shared ply depth, if every line has the same one.
    pub fn depth(&self) -> Option<usize>
    {
        let first = self.lines.first()?.len();
        self.lines.iter().all(|line| line.len() == first).then_some(first)
    }

    /// The multiset of coordinate-move sequences, which identifies a forest independently
    /// of line order and notation style.
    pub fn fingerprint(&self) -> HashMultiSet<Vec<UciString>>
    {
        self.lines.iter().map(|line| line.uci_sequence()).collect()
    }

    pub fn is_empty(&self) -> bool
    {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line>
    {
        self.lines.iter()
    }

    pub fn len(&self) -> usize
    {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line]
    {
        &self.lines
    }

    /// Whether two forests hold the same multiset of move sequences.
    pub fn same_lines(&self, other: &Forest) -> bool
    {
        let (ours, theirs) = (self.fingerprint(), other.fingerprint());
        ours.len() == theirs.len() && ours.distinct_elements().all(|seq| ours.count_of(seq) == theirs.count_of(seq))
    }
}

impl FromIterator<Line> for Forest
{
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self
    {
        Forest::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Forest
{
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Forest
{
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.lines.iter()
    }
}

impl Extend<Line> for Forest
{
    fn extend<T: IntoIterator<Item = Line>>(&mut self, iter: T)
    {
        self.lines.extend(iter)
    }
}
