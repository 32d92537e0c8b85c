//! Admission decision engine.
//!
//! ```text
//! NORMALIZE → LINT → ALLOW_CHECK → DENY_CHECK → { ALLOWED, DENIED, DENIED_WITH_SUGGESTION }
//! ```
//!
//! Lint rejections and policy hits become [`Verdict`]s. Only a misbehaving
//! oracle is returned as an error.

use super::fallback::find_alternative;
use super::lint::{LintOracle, LintOutcome};
use super::messages;
use super::normalize::CommandInvocation;
use super::track::ReleaseTrack;
use crate::error::LintError;
use crate::security::{AccessPolicy, Classification, DenialKind, Verdict};
use std::sync::Arc;
use tracing::{debug, info};

/// What the engine produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// `<tool_name> debug config`: the effective access lists, no lint performed.
    Introspection(String),
    Verdict {
        invocation: CommandInvocation,
        verdict: Verdict,
    },
}

pub struct AdmissionEngine {
    policy: Arc<AccessPolicy>,
    oracle: Arc<dyn LintOracle>,
    tool_name: String,
}

impl AdmissionEngine {
    pub fn new(
        policy: Arc<AccessPolicy>,
        oracle: Arc<dyn LintOracle>,
        tool_name: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            oracle,
            tool_name: tool_name.into(),
        }
    }

    /// Whether `args` is exactly `<tool_name> debug config`.
    pub fn is_debug_config(&self, args: &[String]) -> bool {
        matches!(args, [tool, debug, config]
            if *tool == self.tool_name && debug == "debug" && config == "config")
    }

    pub async fn admit(&self, args: &[String]) -> Result<Admission, LintError> {
        if self.is_debug_config(args) {
            debug!("debug config requested; skipping admission");
            return Ok(Admission::Introspection(self.policy.describe()));
        }

        let invocation = CommandInvocation::new(args.iter().map(String::as_str));
        let verdict = self.decide(&invocation).await?;

        match &verdict {
            Verdict::Allowed { path } => info!(%path, "gcloud command admitted"),
            Verdict::Denied { kind, .. } => {
                info!(command = %invocation, %kind, "gcloud command denied");
            }
            Verdict::DeniedWithSuggestion { suggestion, .. } => info!(
                command = %invocation,
                suggestion = %suggestion.command,
                "gcloud command denied; alternative suggested"
            ),
        }

        Ok(Admission::Verdict {
            invocation,
            verdict,
        })
    }

    async fn decide(&self, invocation: &CommandInvocation) -> Result<Verdict, LintError> {
        if invocation.is_empty() {
            return Ok(Verdict::Denied {
                kind: DenialKind::SyntaxInvalid,
                reason: messages::empty_command(),
            });
        }

        let lint = self.oracle.lint(&invocation.command_string()).await?;
        let path = match lint.outcome {
            LintOutcome::Valid(path) => path,
            LintOutcome::Invalid { diagnostic } => {
                return Ok(Verdict::Denied {
                    kind: DenialKind::SyntaxInvalid,
                    reason: messages::syntax_invalid(invocation, &diagnostic),
                });
            }
        };

        match self.policy.classify(&path) {
            Classification::Allowed => Ok(Verdict::Allowed { path }),
            Classification::AllowlistMiss => Ok(Verdict::Denied {
                kind: DenialKind::AllowlistMiss,
                reason: messages::allowlist_miss(invocation, &self.tool_name),
            }),
            Classification::DenylistHit { entry } => {
                debug!(%path, %entry, "denylist hit");
                let origin = path.release_track();
                let suggestion = if matches!(origin, ReleaseTrack::Alpha | ReleaseTrack::Beta) {
                    find_alternative(self.oracle.as_ref(), &self.policy, invocation, origin).await
                } else {
                    None
                };
                Ok(match suggestion {
                    Some(suggestion) => Verdict::DeniedWithSuggestion {
                        reason: messages::denied_with_suggestion(invocation, &suggestion),
                        path,
                        suggestion,
                    },
                    None => Verdict::Denied {
                        kind: DenialKind::DenylistHit,
                        reason: messages::denylist_hit(invocation, &entry),
                    },
                })
            }
        }
    }
}
