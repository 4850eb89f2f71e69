use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::prelude::*;

lazy_static! {
    static ref SAN_RE: Regex = Regex::new(
        r"^(O-O(-O)?|0-0(-0)?|[KQRBN][a-h]?[1-8]?x?[a-h][1-8]|([a-h]x)?[a-h][1-8](=[QRBNqrbn]|[QRBN])?)[+#]?$"
    )
    .unwrap();
    static ref PROMOTION_RE: Regex = Regex::new(r"^(([a-h]x)?[a-h][18])=?([QRBNqrbn])([+#]?)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Represents a syntactically-valid move in standard algebraic notation.
///
/// You can't prove validity of a particular string in a vacuum, you need a position.
pub struct SanString(pub(crate) String);

impl SanString
{
    /// Whether a token looks like algebraic notation at all.
    pub fn matches(s: &str) -> bool
    {
        SAN_RE.is_match(s)
    }

    /// Rewrites the other common spellings into the usual one: zeros for castling (`0-0`),
    /// promotions without `=` (`e8Q`) or with a lowercase piece (`e8=q`).
    pub fn canonical(s: &str) -> String
    {
        if s.starts_with("0-0")
        {
            return s.replace('0', "O");
        }
        PROMOTION_RE
            .replace(s, |caps: &Captures| format!("{}={}{}", &caps[1], caps[3].to_ascii_uppercase(), &caps[4]))
            .into_owned()
    }
}

impl FromStr for SanString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match SanString::matches(s)
        {
            | true => Ok(SanString(SanString::canonical(s))),
            | false => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

impl AsRef<str> for SanString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for SanString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
