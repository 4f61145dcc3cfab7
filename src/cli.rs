use anyhow::Context;
use clap::Parser;

use crate::launcher::{run_batch, LaunchResult, Launcher};
use crate::presets::PresetStore;

#[derive(Parser, Debug)]
#[command(version, about = "Launch groups of commands and URIs in one go", long_about = None)]
pub struct Args {
    /// Run every command of the named preset and exit without opening the window
    #[arg(long, value_name = "PRESET")]
    pub run: Option<String>,
}

/// Load the store and launch all commands of `name`.
///
/// Load failures and unknown presets are errors; individual launch failures
/// are returned in the result list.
pub fn run_preset<L: Launcher + ?Sized>(
    store: &PresetStore,
    name: &str,
    launcher: &L,
) -> anyhow::Result<Vec<LaunchResult>> {
    let presets = store.load().context("Error loading presets")?;
    let commands = presets.get(name).with_context(|| {
        format!(
            "Preset not found: '{name}' not in {}",
            store.path().display()
        )
    })?;
    tracing::info!(preset = name, count = commands.len(), "running preset");
    Ok(run_batch(launcher, commands))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_flag() {
        let args = Args::try_parse_from(["preset_launcher", "--run", "games"]).unwrap();
        assert_eq!(args.run.as_deref(), Some("games"));
        let args = Args::try_parse_from(["preset_launcher"]).unwrap();
        assert!(args.run.is_none());
    }

    #[test]
    fn run_requires_a_value() {
        assert!(Args::try_parse_from(["preset_launcher", "--run"]).is_err());
    }
}
