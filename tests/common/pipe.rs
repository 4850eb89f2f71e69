use std::{
    io::Write,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
        Mutex,
    },
};

#[derive(Clone, Default)]
/// An in-memory stand-in for an engine's stdin that records everything written to it.
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer
{
    /// Everything written so far, one entry per line.
    pub fn lines(&self) -> Vec<String>
    {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap().lines().map(|l| l.to_owned()).collect()
    }
}

impl Write for SharedBuffer
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize>
    {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()>
    {
        Ok(())
    }
}

/// A channel pre-loaded with an engine's output lines.
pub fn engine_output(lines: &[&str]) -> (Sender<String>, Receiver<String>)
{
    let (tx, rx) = mpsc::channel();
    queue(&tx, lines);
    (tx, rx)
}

pub fn queue(tx: &Sender<String>, lines: &[&str])
{
    for line in lines
    {
        tx.send(line.to_string()).unwrap();
    }
}

/// The output of a well-behaved engine's handshake.
pub const HANDSHAKE: &[&str] = &[
    "id name Fakefish 1",
    "id author nobody",
    "option name Threads type spin default 1 min 1 max 1024",
    "option name Hash type spin default 16 min 1 max 33554432",
    "option name MultiPV type spin default 1 min 1 max 256",
    "uciok",
    "readyok",
];
