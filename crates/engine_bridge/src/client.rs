use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use chess_core::GameState;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout};
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::config::{EngineConfig, SearchLimit};
use crate::error::BridgeError;
use crate::protocol::{BestMove, Command, EngineLine};

const QUIT_GRACE: Duration = Duration::from_millis(200);

/// A running UCI engine process.
///
/// Dropping the value kills the child; call [`UciEngine::quit`] to let the
/// engine exit on its own first.
pub struct UciEngine {
    child: Child,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
    name: Option<String>,
    author: Option<String>,
    options: HashSet<String>,
    config: EngineConfig,
}

impl UciEngine {
    /// Start `path` and run the handshake, then apply the strength and
    /// resource settings from `config`.
    pub async fn spawn(path: impl AsRef<Path>, config: &EngineConfig) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let mut child = tokio::process::Command::new(path)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                path: path.display().to_string(),
                source,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BridgeError::Handshake("engine stdin not captured".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| BridgeError::Handshake("engine stdout not captured".into()))?;

        let mut engine = Self {
            child,
            stdin,
            lines: BufReader::new(stdout).lines(),
            name: None,
            author: None,
            options: HashSet::new(),
            config: config.clone(),
        };
        engine.handshake().await?;
        engine.configure().await?;
        Ok(engine)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn supports_option(&self, name: &str) -> bool {
        self.options.contains(name)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn handshake(&mut self) -> Result<(), BridgeError> {
        let deadline = self.handshake_deadline();
        self.send(&Command::Uci).await?;
        loop {
            match self.read_line(deadline, "uciok").await? {
                EngineLine::IdName(name) => self.name = Some(name),
                EngineLine::IdAuthor(author) => self.author = Some(author),
                EngineLine::Option(name) => {
                    self.options.insert(name);
                }
                EngineLine::UciOk => break,
                other => trace!(?other, "ignored before uciok"),
            }
        }
        info!(
            name = self.name.as_deref().unwrap_or("?"),
            author = self.author.as_deref().unwrap_or("?"),
            options = self.options.len(),
            "engine identified"
        );

        if self.supports_option("Threads") {
            let threads = self.config.threads.unwrap_or_else(available_threads).max(1);
            self.set_option("Threads", &threads.to_string()).await?;
        }
        if self.supports_option("Hash") {
            let hash = self.config.hash_mb.to_string();
            self.set_option("Hash", &hash).await?;
        }
        self.ready().await
    }

    async fn configure(&mut self) -> Result<(), BridgeError> {
        if let Some(level) = self.config.skill_level {
            self.set_skill_level(level).await?;
        }
        if let Some(elo) = self.config.elo {
            self.set_difficulty_elo(elo, true).await?;
        }
        self.ready().await
    }

    /// Write one command line.
    pub async fn send(&mut self, command: &Command) -> Result<(), BridgeError> {
        let line = command.to_string();
        trace!(">> {}", line);
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }

    async fn read_line(
        &mut self,
        deadline: Instant,
        waiting_for: &'static str,
    ) -> Result<EngineLine, BridgeError> {
        let budget = deadline.saturating_duration_since(Instant::now());
        let next = tokio::time::timeout_at(deadline, self.lines.next_line())
            .await
            .map_err(|_| BridgeError::Timeout {
                waiting_for,
                after_ms: budget.as_millis() as u64,
            })??;
        match next {
            Some(line) => {
                trace!("<< {}", line);
                Ok(EngineLine::parse(&line))
            }
            None => Err(BridgeError::Closed),
        }
    }

    fn handshake_deadline(&self) -> Instant {
        Instant::now() + Duration::from_millis(self.config.handshake_timeout_ms)
    }

    /// `isready`, then wait for `readyok`.
    pub async fn ready(&mut self) -> Result<(), BridgeError> {
        let deadline = self.handshake_deadline();
        self.send(&Command::IsReady).await?;
        loop {
            match self.read_line(deadline, "readyok").await? {
                EngineLine::ReadyOk => return Ok(()),
                other => trace!(?other, "ignored before readyok"),
            }
        }
    }

    /// Options the engine did not advertise are skipped. An engine that
    /// advertised nothing gets every option.
    pub async fn set_option(&mut self, name: &str, value: &str) -> Result<(), BridgeError> {
        if !self.options.is_empty() && !self.options.contains(name) {
            debug!(option = name, "engine does not advertise option, skipping");
            return Ok(());
        }
        self.send(&Command::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        })
        .await
    }

    pub async fn set_skill_level(&mut self, level: i32) -> Result<(), BridgeError> {
        let level = level.clamp(0, 20);
        self.set_option("Skill Level", &level.to_string()).await
    }

    pub async fn set_difficulty_elo(
        &mut self,
        elo: u32,
        limit_strength: bool,
    ) -> Result<(), BridgeError> {
        let limit = if limit_strength { "true" } else { "false" };
        self.set_option("UCI_LimitStrength", limit).await?;
        self.set_option("UCI_Elo", &elo.to_string()).await
    }

    pub async fn new_game(&mut self) -> Result<(), BridgeError> {
        self.send(&Command::UciNewGame).await?;
        self.ready().await
    }

    pub async fn set_position_fen(
        &mut self,
        fen: &str,
        moves: &[String],
    ) -> Result<(), BridgeError> {
        self.send(&Command::PositionFen {
            fen: fen.to_string(),
            moves: moves.to_vec(),
        })
        .await
    }

    pub async fn set_position_startpos(&mut self, moves: &[String]) -> Result<(), BridgeError> {
        self.send(&Command::PositionStartpos {
            moves: moves.to_vec(),
        })
        .await
    }

    /// Start a search on the current position and wait for `bestmove`.
    pub async fn go(&mut self, limit: SearchLimit) -> Result<BestMove, BridgeError> {
        let deadline = Instant::now() + Duration::from_millis(self.config.move_timeout_ms);
        self.send(&Command::Go(limit)).await?;
        loop {
            match self.read_line(deadline, "bestmove").await? {
                EngineLine::BestMove(best) => {
                    debug!(?best, "engine replied");
                    return Ok(best);
                }
                EngineLine::Info(info) => debug!(target: "engine_bridge::info", "{}", info),
                other => trace!(?other, "ignored during search"),
            }
        }
    }

    /// Send the session's full FEN and search it.
    pub async fn best_move_for(
        &mut self,
        state: &GameState,
        limit: SearchLimit,
    ) -> Result<BestMove, BridgeError> {
        self.set_position_fen(&state.fen_full(), &[]).await?;
        self.go(limit).await
    }

    /// Ask the engine to exit; kill it if it is still running after a
    /// short grace period.
    pub async fn quit(mut self) -> Result<(), BridgeError> {
        if let Err(err) = self.send(&Command::Quit).await {
            debug!(%err, "quit not delivered");
        }
        match tokio::time::timeout(QUIT_GRACE, self.child.wait()).await {
            Ok(status) => {
                let status = status?;
                debug!(%status, "engine exited");
            }
            Err(_) => {
                warn!("engine ignored quit, killing");
                self.child.kill().await?;
            }
        }
        Ok(())
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
