use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Static engine configuration, applied once when the engine starts.
pub struct EngineOptions
{
    pub path:    PathBuf,
    pub args:    Vec<String>,
    /// Search depth in plies for every query.
    pub depth:   u32,
    pub hash_mb: u32,
    pub threads: usize,
    /// Further `Name=Value` engine options.
    pub extra:   Vec<String>,
}

impl Default for EngineOptions
{
    fn default() -> Self
    {
        EngineOptions {
            path:    PathBuf::from("stockfish"),
            args:    Vec::new(),
            depth:   30,
            hash_mb: 2048,
            threads: 16,
            extra:   Vec::new(),
        }
    }
}

#[derive(Clone, Parser, Debug)]
#[command(version, about = "Grows a tree of chess openings from an engine's best moves.", long_about = None)]
pub struct Options
{
    #[arg(short, long, env = "OPENINGS_ENGINE", default_value = "stockfish")]
    /// path to a UCI engine
    pub engine: PathBuf,

    #[arg(long = "engine-arg", value_name = "ARG")]
    /// argument passed to the engine process (repeatable)
    pub engine_args: Vec<String>,

    #[arg(short, long, env = "OPENINGS_DEPTH", default_value_t = 30)]
    /// search depth in plies
    pub depth: u32,

    #[arg(long, env = "OPENINGS_HASH", default_value_t = 2048)]
    /// engine hash size in MB
    pub hash: u32,

    #[arg(short, long, env = "OPENINGS_THREADS", default_value_t = 16)]
    /// engine search threads (per worker)
    pub threads: usize,

    #[arg(long = "option", value_name = "NAME=VALUE")]
    /// extra engine option (repeatable)
    pub engine_options: Vec<String>,

    #[arg(short, long, default_value_t = 1)]
    /// number of engine processes expanding in parallel
    pub workers: usize,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, conflicts_with = "seed")]
    /// file holding a previously saved forest
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    /// file to save the forest to (stdout if absent)
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    /// moves to start from, e.g. "e4 e5 Nf3 Nc6 Bb5"
    pub seed: Option<String>,

    #[arg(long)]
    /// starting position as a FEN (defaults to the initial position)
    pub fen: Option<String>,

    #[arg(long, default_value_t = false)]
    /// write move numbers
    pub numbered: bool,

    #[arg(long, default_value_t = false)]
    /// print the board of the starting line
    pub board: bool,

    /// expansion factor for each round, e.g. `5 1 3 1`
    pub factors: Vec<usize>,
}

impl Options
{
    /// The engine configuration these options describe.
    pub fn engine_options(&self) -> EngineOptions
    {
        EngineOptions {
            path:    self.engine.clone(),
            args:    self.engine_args.clone(),
            depth:   self.depth,
            hash_mb: self.hash,
            threads: self.threads,
            extra:   self.engine_options.clone(),
        }
    }
}
