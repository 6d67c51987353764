//! Host runtime.
//!
//! The game lives on a single tokio task. Gravity ticks (from an interval) and
//! player actions (from a channel) are both handled on that task, so each
//! lock/clear/spawn sequence finishes before the next move is looked at.
//! [`Host`] wraps the task for synchronous callers such as the terminal loop.

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::config::HostConfig;
use crate::core::{GameState, RenderSnapshot, TickEvent};
use crate::error::HostError;
use crate::observation::Observation;
use crate::types::{GameAction, Lifecycle};

/// Command delivered to the host task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Action(GameAction),
    /// Advance gravity immediately, outside the regular cadence
    Tick,
    Shutdown,
}

struct Publisher {
    seq: u64,
    last: Option<RenderSnapshot>,
    tx: mpsc::UnboundedSender<Observation>,
}

impl Publisher {
    /// Send an observation if the snapshot differs from the last one sent
    fn publish(&mut self, snapshot: RenderSnapshot, event: Option<TickEvent>) {
        if self.last == Some(snapshot) {
            return;
        }
        self.last = Some(snapshot);
        self.seq += 1;
        let _ = self
            .tx
            .send(Observation::from_snapshot(self.seq, &snapshot, event));
    }
}

fn log_tick(config: &HostConfig, game: &GameState) {
    if !config.log_events {
        return;
    }
    let layers = game.cleared_layers();
    if !layers.is_empty() {
        eprintln!("[Host] Cleared {} layer(s) at y={:?}", layers.len(), layers);
    }
    if let Some(TickEvent::GameOver { final_score, .. }) = game.last_event() {
        eprintln!("[Host] Game over, final score: {}", final_score);
    }
}

/// Run the game until shut down; returns the last snapshot.
///
/// Stops on [`HostCommand::Shutdown`] or when every command sender is gone.
pub async fn run_host(
    config: HostConfig,
    mut commands: mpsc::Receiver<HostCommand>,
    observations: mpsc::UnboundedSender<Observation>,
) -> RenderSnapshot {
    let mut game = GameState::new(config.seed);
    let mut publisher = Publisher {
        seq: 0,
        last: None,
        tx: observations,
    };

    if config.autostart {
        game.start();
        if config.log_events {
            eprintln!("[Host] Game started (seed {})", config.seed);
        }
    }
    publisher.publish(game.snapshot(), None);

    let period = config.tick_interval();
    let mut gravity = interval_at(Instant::now() + period, period);
    gravity.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let command = tokio::select! {
            _ = gravity.tick() => HostCommand::Tick,
            cmd = commands.recv() => cmd.unwrap_or(HostCommand::Shutdown),
        };

        match command {
            HostCommand::Tick => {
                let was_running = game.is_running();
                let snapshot = game.tick();
                if was_running {
                    log_tick(&config, &game);
                    publisher.publish(snapshot, game.last_event());
                }
            }
            HostCommand::Action(action) => {
                let before = game.lifecycle();
                let snapshot = game.apply_action(action);
                let began = action == GameAction::Restart
                    || (action == GameAction::Start && before == Lifecycle::NotStarted);
                if began {
                    // A new game gets a full period before its first drop.
                    gravity.reset();
                    if config.log_events {
                        eprintln!("[Host] Game started (seed {})", config.seed);
                    }
                }
                publisher.publish(snapshot, None);
            }
            HostCommand::Shutdown => break,
        }
    }

    if config.log_events {
        eprintln!("[Host] Shutting down, score: {}", game.score());
    }
    game.snapshot()
}

/// Running host instance.
pub struct Host {
    rt: Runtime,
    cmd_tx: mpsc::Sender<HostCommand>,
    obs_rx: mpsc::UnboundedReceiver<Observation>,
    task: JoinHandle<RenderSnapshot>,
}

impl Host {
    /// Spawn the host task on a fresh tokio runtime.
    pub fn start(config: HostConfig) -> Result<Self, HostError> {
        let rt = Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>(config.max_pending_commands.max(1));
        let (obs_tx, obs_rx) = mpsc::unbounded_channel::<Observation>();

        let task = rt.spawn(run_host(config, cmd_rx, obs_tx));

        Ok(Self {
            rt,
            cmd_tx,
            obs_rx,
            task,
        })
    }

    /// Queue an action; blocks while the command channel is full.
    pub fn send(&self, action: GameAction) -> Result<(), HostError> {
        self.cmd_tx
            .blocking_send(HostCommand::Action(action))
            .map_err(|_| HostError::Stopped)
    }

    /// Next pending observation, if any.
    pub fn try_recv(&mut self) -> Option<Observation> {
        self.obs_rx.try_recv().ok()
    }

    /// Stop the host task and return the final snapshot.
    pub fn shutdown(self) -> Result<RenderSnapshot, HostError> {
        // The task may already be gone; joining still reports its result.
        let _ = self.cmd_tx.blocking_send(HostCommand::Shutdown);
        let snapshot = self.rt.block_on(self.task)?;
        Ok(snapshot)
    }
}
