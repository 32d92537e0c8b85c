/// Commands that are always denied, whatever the user configures.
///
/// Interactive, SSH, and tunnel-style commands open sessions the agent cannot
/// drive and would hang the tool call. `meta` holds gcloud's internal tooling,
/// including the lint command admission control itself relies on.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "compute connect-to-serial-port",
    "compute ssh",
    "compute start-iap-tunnel",
    "compute tpus tpu-vm ssh",
    "compute tpus queued-resources ssh",
    "cloud-shell ssh",
    "workstations ssh",
    "app instances ssh",
    "interactive",
    "meta",
];

#[must_use]
pub fn default_denied_commands() -> Vec<String> {
    DEFAULT_DENYLIST.iter().map(|entry| (*entry).to_string()).collect()
}
