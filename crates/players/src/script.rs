use bmb_gameplay::Action;
use bmb_gameplay::Observation;
use bmb_gameroom::Event;
use bmb_gameroom::Player;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::process::Child;
use tokio::process::ChildStdin;
use tokio::process::ChildStdout;
use tokio::process::Command;

/// An uploaded strategy running as an external process.
///
/// The contract is newline-delimited JSON over stdio: one serialized
/// [`Observation`] in, one tagged [`Action`] out, for every decision. The
/// process is spawned once per seat and killed when the seat is dropped.
///
/// Any deviation (process exit, malformed output, closed pipe) surfaces as
/// an error from `decide`; the room treats that as a strategy fault and
/// folds the seat, so a misbehaving upload can never wedge the table.
pub struct Script {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl Script {
    /// Spawns the strategy process. The path must name an executable; an
    /// interpreter shebang is the upload's own business.
    pub fn spawn(path: &Path) -> anyhow::Result<Self> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| anyhow::anyhow!("spawn {}: {}", path.display(), e))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("no stdin pipe"))?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .map(AsyncBufReadExt::lines)
            .ok_or_else(|| anyhow::anyhow!("no stdout pipe"))?;
        log::info!("[script] spawned strategy {}", path.display());
        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }
    /// Spawns an arbitrary command. Test seam.
    pub fn command(mut command: Command) -> anyhow::Result<Self> {
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("no stdin pipe"))?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .map(AsyncBufReadExt::lines)
            .ok_or_else(|| anyhow::anyhow!("no stdout pipe"))?;
        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}

#[async_trait::async_trait]
impl Player for Script {
    async fn decide(&mut self, observation: &Observation) -> anyhow::Result<Action> {
        let mut line = serde_json::to_string(observation)?;
        line.push('\n');
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.flush().await?;
        let reply = self
            .stdout
            .next_line()
            .await?
            .ok_or_else(|| anyhow::anyhow!("strategy closed stdout"))?;
        let action = serde_json::from_str(&reply)
            .map_err(|e| anyhow::anyhow!("malformed action {:?}: {}", reply, e))?;
        Ok(action)
    }

    async fn notify(&mut self, _: &Event) {}
}
