//! Verdict texts returned to the calling agent.

use super::normalize::{CLI_NAME, CommandInvocation};
use crate::security::{DEFAULT_DENYLIST, Suggestion};
use std::fmt::Write as _;

pub fn empty_command() -> String {
    "No gcloud command was given. Pass the command as a list of arguments without the \
     leading `gcloud`, e.g. [\"compute\", \"instances\", \"list\"]."
        .to_string()
}

pub fn syntax_invalid(command: &CommandInvocation, diagnostic: &str) -> String {
    format!(
        "`{CLI_NAME} {command}` is not a valid gcloud command.\n\
         {diagnostic}\n\
         Do not retry this exact command. Research the correct syntax instead, \
         for example with `{CLI_NAME} help` on the command group or the gcloud reference docs."
    )
}

pub fn allowlist_miss(command: &CommandInvocation, tool_name: &str) -> String {
    format!(
        "`{CLI_NAME} {command}` is not on the allowlist configured for this server, \
         so it will not be run.\n\
         Do not retry it. Choose an explicitly permitted command instead; run \
         `{tool_name} debug config` to see which commands are allowed."
    )
}

pub fn denylist_hit(command: &CommandInvocation, entry: &str) -> String {
    let mut text = format!(
        "`{CLI_NAME} {command}` is denied by this server's configuration \
         (matched `{entry}`).\n\
         This denial is permanent until the server is reconfigured. Do not retry this \
         command or any variant of it on another release track.\n\
         The following commands are always denied:\n"
    );
    for default in DEFAULT_DENYLIST {
        let _ = writeln!(text, "  - {default}");
    }
    text
}

pub fn denied_with_suggestion(command: &CommandInvocation, suggestion: &Suggestion) -> String {
    format!(
        "`{CLI_NAME} {command}` is denied by this server's configuration.\n\
         The {track} equivalent is permitted: `{CLI_NAME} {alternative}`\n\
         Retry with that command instead.",
        track = suggestion.track,
        alternative = suggestion.command,
    )
}
