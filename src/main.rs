//! Headless terminal host (default binary).
//!
//! Reads keys with crossterm, drives the simulation through the host runtime
//! and writes one JSON observation per line to stdout, for an external
//! renderer to draw. Status lines go to stderr.
//!
//! Keys: arrows/WASD/HJKL move, Enter starts, `r` restarts, `q`/Esc quits.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use cubetris::host::{Host, HostConfig};
use cubetris::input::{handle_key_event, should_quit};

/// How long to wait for a key before draining observations again
const POLL_MS: u64 = 16;

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    let mut host = Host::start(config).context("failed to start host")?;

    terminal::enable_raw_mode().context("failed to enter raw mode")?;
    let result = run(&mut host);

    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();

    let last = host.shutdown()?;
    eprintln!("[Cubetris] Final score: {}", last.score);
    result
}

fn run(host: &mut Host) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        while let Some(obs) = host.try_recv() {
            // Raw mode turns off newline translation.
            write!(out, "{}\r\n", obs.to_json_line()?)?;
        }
        out.flush()?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = handle_key_event(key) {
                host.send(action)?;
            }
        }
    }
}
