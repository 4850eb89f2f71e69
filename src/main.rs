use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use openings::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = Options::parse();

    // Buffer and flush so that worker threads don't interleave their lines.
    let logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::WithThread)
        .start()?;

    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&options)
    {
        log::error!("fatal error: {}", e);
        logger.flush();
        std::process::exit(1);
    }

    Ok(())
}

fn run(options: &Options) -> Result<()>
{
    let rules = Standard;
    let start = match &options.fen
    {
        | Some(fen) => fen.parse::<FenString>()?,
        | None => rules.start(),
    };

    let codec = Codec::new(rules).with_start(start.clone()).numbered(options.numbered);
    let mut forest = load(&codec, options, start)?;

    if options.board
    {
        if let Some(line) = forest.lines().first()
        {
            println!("{}", rules.render_board(line.current(), line.current().white_to_move())?);
        }
    }

    if !options.factors.is_empty()
    {
        let engine_options = options.engine_options();
        let mut workers = (0..options.workers.max(1))
            .map(|_| UciEngine::spawn(&engine_options).map(|engine| Expander::new(Standard, engine)))
            .collect::<Result<Vec<_>>>()?;

        for (round, &factor) in options.factors.iter().enumerate()
        {
            log::info!("round {} of {}", round + 1, options.factors.len());
            let expansion = expand_parallel(&mut workers, &forest, factor)?;
            if !expansion.dropped.is_empty()
            {
                log::warn!("{} lines dropped in round {}", expansion.dropped.len(), round + 1);
            }
            forest = expansion.forest;
        }
    }

    let text = codec.serialize(&forest)?;
    match &options.output
    {
        | Some(path) =>
        {
            std::fs::write(path, text)?;
            log::info!("saved {} lines to {}", forest.len(), path.display());
        }
        | None => print!("{}", text),
    }

    Ok(())
}

/// Builds the forest to start from: a saved file, a seed line, or a single empty line.
fn load(codec: &Codec<Standard>, options: &Options, start: FenString) -> Result<Forest>
{
    if let Some(path) = &options.input
    {
        let text = std::fs::read_to_string(path)?;
        let decoded = codec.deserialize(&text);
        for failure in &decoded.failures
        {
            log::warn!("{}:{} skipped: {}", path.display(), failure.line_number, failure.error);
        }
        return Ok(decoded.forest);
    }

    if let Some(seed) = &options.seed
    {
        return Ok(Forest::new(vec![codec.decode_line(seed)?]));
    }

    Ok(Forest::seed(start))
}
