pub mod defaults;
pub mod policy;

pub use defaults::{DEFAULT_DENYLIST, default_denied_commands};
pub use policy::{
    AccessPolicy, Classification, CommandMatcher, Decision, DenialKind, Suggestion, Verdict,
};
