use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `gcloud-guard`.
///
/// Policy outcomes (syntax errors, allowlist misses, denylist hits) are not
/// errors: the admission engine turns them into verdict text. Only the
/// failures below escape it. Internal glue keeps using `anyhow::Result` for
/// ad-hoc context chains.
#[derive(Debug, Error)]
pub enum GuardError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Lint oracle ─────────────────────────────────────────────────────
    #[error("lint oracle: {0}")]
    Lint(#[from] LintError),

    // ── Command execution ───────────────────────────────────────────────
    #[error("exec: {0}")]
    Exec(#[from] ExecError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("access.allow and access.deny are mutually exclusive; configure only one of them")]
    Conflict,

    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Lint oracle errors ──────────────────────────────────────────────────────

/// The oracle itself misbehaved. A command the oracle rejects is a normal
/// `LintResult`, never one of these.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to start `{binary}`: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lint timed out after {secs}s")]
    TimedOut { secs: u64 },

    #[error("lint returned no entries")]
    EmptyResponse,

    #[error("malformed lint output: {0}")]
    MalformedResponse(String),
}

// ─── Execution errors ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start `{binary}`: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command timed out after {secs}s and was killed")]
    TimedOut { secs: u64 },
}
