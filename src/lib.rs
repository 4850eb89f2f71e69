pub mod engine;
pub(crate) mod error;
pub mod expansion;
pub mod opening;
pub(crate) mod options;
pub mod rules;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        engine::*,
        error::{Error, Kind, Result},
        expansion::*,
        opening::*,
        options::*,
        rules::*,
    };
}
