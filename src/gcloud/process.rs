use std::fmt::Write as _;
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Environment variables passed through to gcloud.
/// Everything else is cleared so credentials for unrelated tools never leak.
const PASSTHROUGH_ENV_VARS: &[&str] = &[
    "PATH",
    "HOME",
    "USER",
    "LANG",
    "LC_ALL",
    "TMPDIR",
    "SYSTEMROOT",
    "APPDATA",
    "LOCALAPPDATA",
    "CLOUDSDK_CONFIG",
    "CLOUDSDK_CORE_PROJECT",
    "CLOUDSDK_PYTHON",
    "GOOGLE_APPLICATION_CREDENTIALS",
];

#[derive(Debug)]
pub(crate) enum SpawnFailure {
    Io(std::io::Error),
    TimedOut,
}

/// Build a gcloud command that can never stop to prompt the user.
pub(crate) fn gcloud_command<I, S>(binary: &str, args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::new(binary);
    cmd.args(args).env_clear().kill_on_drop(true);
    for var in PASSTHROUGH_ENV_VARS {
        if let Ok(val) = std::env::var(var) {
            cmd.env(var, val);
        }
    }
    cmd.env("CLOUDSDK_CORE_DISABLE_PROMPTS", "1");
    cmd.stdin(std::process::Stdio::null());
    cmd
}

/// Run to completion, killing the child if it outlives `timeout`.
pub(crate) async fn output_with_timeout(
    mut cmd: Command,
    timeout: Duration,
) -> Result<Output, SpawnFailure> {
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(SpawnFailure::Io(e)),
        Err(_) => Err(SpawnFailure::TimedOut),
    }
}

/// Lossy UTF-8 decode, truncated on a char boundary at `max_bytes`.
pub(crate) fn decode_truncated(bytes: &[u8], max_bytes: usize, label: &str) -> String {
    let mut text = String::from_utf8_lossy(bytes).to_string();
    if text.len() > max_bytes {
        text.truncate(text.floor_char_boundary(max_bytes));
        let _ = write!(text, "\n... [{label} truncated at {max_bytes} bytes]");
    }
    text
}
