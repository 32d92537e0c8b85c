//! gcloud command admission control and execution.
//!
//! Every agent-issued command is normalized, linted by gcloud itself,
//! checked against the access policy and, when denied on a prerelease track,
//! offered a permitted equivalent. Only admitted commands reach [`runner`].

pub mod admission;
pub mod fallback;
pub mod lint;
pub mod messages;
pub mod normalize;
mod process;
pub mod runner;
pub mod track;

pub use admission::{Admission, AdmissionEngine};
pub use lint::{GcloudLintOracle, LintOracle, LintOutcome, LintResult};
pub use normalize::{CommandInvocation, CommandPath};
pub use runner::{CommandRunner, GcloudRunner, RunOutput};
pub use track::ReleaseTrack;
