use openings::prelude::*;

/// Builds a line from the initial position by replaying algebraic moves.
pub fn line_of(sans: &str) -> Line
{
    let decoded = Codec::new(Standard).decode_line(sans);
    assert!(decoded.is_ok(), "\tdue to {}", decoded.unwrap_err());
    decoded.unwrap()
}

/// Builds a forest with one line per entry.
pub fn forest_of(lines: &[&str]) -> Forest
{
    lines.iter().map(|sans| line_of(sans)).collect()
}

/// The algebraic moves of a line, as plain strings.
pub fn sans(line: &Line) -> Vec<String>
{
    line.iter().map(|mv| mv.san().to_string()).collect()
}

/// The coordinate moves of a line, as plain strings.
pub fn ucis(line: &Line) -> Vec<String>
{
    line.iter().map(|mv| mv.uci().to_string()).collect()
}
