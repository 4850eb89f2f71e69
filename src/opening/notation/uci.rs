use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref UCI_RE: Regex = Regex::new(r"^([a-h][1-8][a-h][1-8][nbrq]?|0000)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Represents a move in coordinate notation, e.g. `e2e4` or `e7e8q`.
pub struct UciString(pub(crate) String);

impl UciString
{
    /// Whether a token looks like coordinate notation.
    pub fn matches(s: &str) -> bool
    {
        UCI_RE.is_match(s)
    }
}

impl FromStr for UciString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match UciString::matches(s)
        {
            | true => Ok(UciString(s.to_owned())),
            | false => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

impl AsRef<str> for UciString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for UciString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
