use std::{
    collections::{BTreeMap, HashSet},
    io::{BufRead, BufReader, BufWriter, Write},
    process::{Child, ChildStdin, Command, Stdio},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    time::{Duration, Instant},
};

use itertools::Itertools;

use crate::prelude::*;

pub const ENGINE_READY_TIMEOUT: Duration = Duration::from_secs(30);
pub const ENGINE_QUIT_TIMEOUT: Duration = Duration::from_millis(300);
pub const ENGINE_QUIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A UCI engine, usually a child process.
///
/// Moves given to `reset_to` and `apply` are only recorded; the engine hears about the
/// position when a query is made, as a single `position fen ... moves ...` command.
pub struct UciEngine<W: Write = BufWriter<ChildStdin>>
{
    child:      Option<Child>,
    stdin:      W,
    rx:         Receiver<String>,
    options:    EngineOptions,
    advertised: HashSet<String>,
    start:      FenString,
    moves:      Vec<UciString>,
    multipv:    usize,
}

impl UciEngine
{
    /// Starts the engine process and performs the UCI handshake.
    pub fn spawn(options: &EngineOptions) -> Result<Self>
    {
        let mut cmd = Command::new(&options.path);
        cmd.args(&options.args).stdin(Stdio::piped()).stdout(Stdio::piped());

        let mut child = cmd.spawn().map_err(|err| {
            Error::from(err).chain(Error::engine(format!("failed to spawn engine at {}", options.path.display())))
        })?;
        let stdin = child.stdin.take().ok_or_else(|| Error::engine("engine has no stdin"))?;
        let stdout = child.stdout.take().ok_or_else(|| Error::engine("engine has no stdout"))?;

        let (tx, rx) = mpsc::channel::<String>();
        std::thread::spawn(move || {
            let reader = BufReader::new(stdout);
            for line in reader.lines()
            {
                match line
                {
                    | Ok(l) =>
                    {
                        if tx.send(l).is_err()
                        {
                            break;
                        }
                    }
                    | Err(_) => break,
                }
            }
        });

        log::info!("started engine {}", options.path.display());

        match UciEngine::connect(BufWriter::new(stdin), rx, options.clone())
        {
            | Ok(mut engine) =>
            {
                engine.child = Some(child);
                Ok(engine)
            }
            | Err(err) =>
            {
                let _ = child.kill();
                let _ = child.wait();
                Err(err)
            }
        }
    }
}

impl<W: Write> UciEngine<W>
{
    /// Drives the handshake over an existing pipe: `stdin` reaches the engine, `rx` yields its output lines.
    pub fn connect(stdin: W, rx: Receiver<String>, options: EngineOptions) -> Result<Self>
    {
        let mut engine = UciEngine {
            child: None,
            stdin,
            rx,
            options,
            advertised: HashSet::new(),
            start: FenString::start(),
            moves: Vec::new(),
            multipv: 0,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&mut self) -> Result<()>
    {
        self.write_line("uci")?;
        loop
        {
            let line = self.recv_line(Some(ENGINE_READY_TIMEOUT))?;
            if let Some(rest) = line.strip_prefix("id name ")
            {
                log::info!("engine identifies as {}", rest);
            }
            else if let Some(rest) = line.strip_prefix("option ")
            {
                if let Some(name) = parse_option_name(rest)
                {
                    self.advertised.insert(name);
                }
            }
            else if line == "uciok"
            {
                break;
            }
        }

        let hash = self.options.hash_mb.to_string();
        let threads = self.options.threads.to_string();
        self.set_option_if_available("Hash", &hash)?;
        self.set_option_if_available("Threads", &threads)?;

        for opt in self.options.extra.clone()
        {
            match opt.split_once('=')
            {
                | Some((name, value)) => self.set_option_if_available(name.trim(), value.trim())?,
                | None => self.write_line(&format!("setoption name {}", opt.trim()))?,
            }
        }

        self.write_line("ucinewgame")?;
        self.sync_ready()
    }

    /// The moves applied since the last reset.
    pub fn applied(&self) -> &[UciString]
    {
        &self.moves
    }

    /// The `position` command describing the current position.
    pub fn position_command(&self) -> String
    {
        match self.moves.is_empty()
        {
            | true => format!("position fen {}", self.start),
            | false => format!("position fen {} moves {}", self.start, self.moves.iter().join(" ")),
        }
    }

    fn recv_line(&self, timeout: Option<Duration>) -> Result<String>
    {
        let line = match timeout
        {
            | Some(timeout) => self.rx.recv_timeout(timeout).map_err(|err| match err
            {
                | RecvTimeoutError::Timeout => Error::engine("engine read timeout"),
                | RecvTimeoutError::Disconnected => Error::engine("engine exited unexpectedly"),
            }),
            | None => self.rx.recv().map_err(|_| Error::engine("engine exited unexpectedly")),
        }?;

        log::trace!("engine > {}", line);
        Ok(line)
    }

    fn set_option_if_available(&mut self, name: &str, value: &str) -> Result<()>
    {
        if self.advertised.is_empty() || self.advertised.contains(name)
        {
            self.write_line(&format!("setoption name {} value {}", name, value))?;
        }
        else
        {
            log::debug!("engine does not advertise option {}, skipping", name);
        }
        Ok(())
    }

    fn sync_ready(&mut self) -> Result<()>
    {
        self.write_line("isready")?;
        loop
        {
            let line = self.recv_line(Some(ENGINE_READY_TIMEOUT))?;
            if line == "readyok"
            {
                return Ok(());
            }
        }
    }

    fn write_line(&mut self, msg: &str) -> Result<()>
    {
        log::trace!("engine < {}", msg);
        let written = (|| {
            self.stdin.write_all(msg.as_bytes())?;
            self.stdin.write_all(b"\n")?;
            self.stdin.flush()
        })();

        written.map_err(|err| Error::from(err).chain(Error::engine(format!("failed to send '{}'", msg))))
    }
}

impl<W: Write> Engine for UciEngine<W>
{
    fn reset_to(&mut self, position: &FenString) -> Result<()>
    {
        self.start = position.clone();
        self.moves.clear();
        Ok(())
    }

    fn apply(&mut self, uci: &UciString) -> Result<()>
    {
        self.moves.push(uci.clone());
        Ok(())
    }

    fn top_candidates(&mut self, n: usize) -> Result<Vec<Candidate>>
    {
        if n == 0
        {
            return Ok(Vec::new());
        }

        if self.multipv != n
        {
            self.set_option_if_available("MultiPV", &n.to_string())?;
            self.multipv = n;
        }

        let position = self.position_command();
        self.write_line(&position)?;
        self.write_line(&format!("go depth {}", self.options.depth))?;

        let mut lines: BTreeMap<usize, PvInfo> = BTreeMap::new();
        loop
        {
            let line = self.recv_line(None)?;

            if let Some(info) = PvInfo::parse(&line)
            {
                if info.bound || info.multipv == 0 || info.multipv > n
                {
                    continue;
                }

                let deeper = lines.get(&info.multipv).map(|prev| info.depth >= prev.depth).unwrap_or(true);
                if deeper
                {
                    lines.insert(info.multipv, info);
                }
                continue;
            }

            if let Some(rest) = line.strip_prefix("bestmove")
            {
                let best = rest.split_whitespace().next().unwrap_or("(none)");
                if best == "(none)" || best == "0000"
                {
                    return Ok(Vec::new());
                }

                if lines.is_empty()
                {
                    let uci = best.parse::<UciString>().map_err(|err| err.chain(Error::engine("unreadable bestmove")))?;
                    return Ok(vec![Candidate { uci, score: None }]);
                }

                let candidates = lines
                    .into_values()
                    .map(|info| Candidate {
                        uci:   info.first,
                        score: info.score,
                    })
                    .take(n)
                    .collect::<Vec<_>>();

                log::debug!(
                    "engine candidates: {}",
                    candidates
                        .iter()
                        .map(|c| format!("{} ({})", c.uci, c.score.map(|s| s.to_string()).unwrap_or("?".into())))
                        .join(", ")
                );
                return Ok(candidates);
            }
        }
    }

    fn resync(&mut self) -> Result<()>
    {
        log::info!("resynchronizing engine");
        self.write_line("stop")?;
        self.write_line("ucinewgame")?;
        self.multipv = 0;
        self.moves.clear();
        self.sync_ready()
    }
}

impl<W: Write> Drop for UciEngine<W>
{
    fn drop(&mut self)
    {
        let _ = self.write_line("quit");

        let Some(child) = self.child.as_mut()
        else
        {
            return;
        };

        let deadline = Instant::now() + ENGINE_QUIT_TIMEOUT;
        while Instant::now() < deadline
        {
            if let Ok(Some(_)) = child.try_wait()
            {
                return;
            }
            std::thread::sleep(ENGINE_QUIT_POLL_INTERVAL);
        }

        log::debug!("engine ignored quit, killing it");
        let _ = child.kill();
        let _ = child.wait();
    }
}

/// Extracts the name from the body of an `option` line.
pub fn parse_option_name(line: &str) -> Option<String>
{
    let mut tokens = line.split_whitespace().peekable();
    while let Some(tok) = tokens.next()
    {
        if tok == "name"
        {
            let mut parts = Vec::new();
            while let Some(next) = tokens.next_if(|next| *next != "type")
            {
                parts.push(next);
            }
            if !parts.is_empty()
            {
                return Some(parts.join(" "));
            }
        }
    }
    None
}
