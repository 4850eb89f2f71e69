mod fen;
mod san;
mod uci;

pub mod types
{
    pub use super::{fen::FenString, san::SanString, uci::UciString};
}
