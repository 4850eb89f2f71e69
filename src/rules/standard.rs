use shakmaty::{
    fen::Fen,
    san::SanPlus,
    uci::Uci,
    CastlingMode,
    Chess,
    EnPassantMode,
    File,
    Position,
    Rank,
    Square,
};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// Standard chess rules, backed by `shakmaty`.
pub struct Standard;

impl Standard
{
    /// Builds the position a FEN describes, rejecting impossible setups.
    fn position(&self, fen: &FenString) -> Result<Chess>
    {
        let setup = fen
            .as_ref()
            .parse::<Fen>()
            .map_err(|err| Error::new(Kind::ParseError, err.to_string()).chain_parse::<FenString>(fen.to_string()))?;

        setup
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|err| Error::new(Kind::ParseError, err.to_string()).chain_parse::<FenString>(fen.to_string()))
    }

    /// Resolves a notation to a legal move in a position.
    fn resolve(&self, pos: &Chess, fen: &FenString, notation: &str) -> Result<shakmaty::Move>
    {
        if UciString::matches(notation)
        {
            let uci = notation.parse::<Uci>().map_err(|_| Error::for_parse::<UciString>(notation.into()))?;
            uci.to_move(pos).map_err(|_| Error::illegal(notation, fen.as_ref()))
        }
        else if SanString::matches(notation)
        {
            let san = SanString::canonical(notation)
                .parse::<SanPlus>()
                .map_err(|_| Error::for_parse::<SanString>(notation.into()))?;
            san.san.to_move(pos).map_err(|_| Error::illegal(notation, fen.as_ref()))
        }
        else
        {
            Err(Error::new(Kind::ParseError, "Expected algebraic or coordinate notation.".into())
                .chain_parse::<Move>(notation.into()))
        }
    }

    /// Describes a legal move in all three notations.
    fn describe(&self, pos: &Chess, m: &shakmaty::Move) -> Move
    {
        let san = SanPlus::from_move(pos.clone(), m);
        let uci = Uci::from_move(m, CastlingMode::Standard);

        let mut after = pos.clone();
        after.play_unchecked(m);

        Move::new(Standard::fen_of(&after), SanString(san.to_string()), UciString(uci.to_string()))
    }

    fn fen_of(pos: &Chess) -> FenString
    {
        FenString(Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string())
    }
}

impl Rules for Standard
{
    fn legal_notation_for(&self, position: &FenString, notation: &str) -> Result<Move>
    {
        let pos = self.position(position)?;
        let m = self.resolve(&pos, position, notation)?;
        Ok(self.describe(&pos, &m))
    }

    fn notation_san_for(&self, position: &FenString, uci: &UciString) -> Result<SanString>
    {
        self.legal_notation_for(position, uci.as_ref()).map(|mv| mv.san().clone())
    }

    fn position_after(&self, position: &FenString, uci: &UciString) -> Result<FenString>
    {
        self.legal_notation_for(position, uci.as_ref()).map(|mv| mv.position_after().clone())
    }

    fn render_board(&self, position: &FenString, white_perspective: bool) -> Result<String>
    {
        let pos = self.position(position)?;
        let board = pos.board();

        let mut ranks: Vec<u32> = (0..8).rev().collect();
        let mut files: Vec<u32> = (0..8).collect();
        if !white_perspective
        {
            ranks.reverse();
            files.reverse();
        }

        let divider = format!("+{}\n", "---+".repeat(8));
        let mut out = divider.clone();
        for &rank in &ranks
        {
            out.push('|');
            for &file in &files
            {
                let square = Square::from_coords(File::new(file), Rank::new(rank));
                let symbol = board.piece_at(square).map(|piece| piece.char()).unwrap_or(' ');
                out.push_str(&format!(" {} |", symbol));
            }
            out.push_str(&format!(" {}\n", rank + 1));
            out.push_str(&divider);
        }

        let labels = files.iter().map(|&file| format!("  {} ", (b'a' + file as u8) as char)).collect::<String>();
        out.push_str(&labels);
        out.push('\n');
        Ok(out)
    }

    fn san_sequence(&self, line: &Line) -> Result<Vec<SanString>>
    {
        let mut pos = self.position(line.start())?;
        let mut sans = Vec::with_capacity(line.len());

        for mv in line.iter()
        {
            let fen = Standard::fen_of(&pos);
            let m = self.resolve(&pos, &fen, mv.uci().as_ref())?;
            sans.push(SanString(SanPlus::from_move(pos.clone(), &m).to_string()));
            pos.play_unchecked(&m);
        }

        Ok(sans)
    }
}
