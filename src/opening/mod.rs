pub(crate) mod codec;
pub(crate) mod forest;
pub(crate) mod line;
pub(crate) mod moves;
pub(crate) mod notation;

pub use codec::{Codec, Decoded, Failure};
pub use forest::Forest;
pub use line::Line;
pub use moves::Move;
pub use notation::types::*;
