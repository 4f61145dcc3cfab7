use preset_launcher::cli::{self, Args};
use preset_launcher::gui::{self, PresetApp};
use preset_launcher::launcher::{failure_report, SystemLauncher};
use preset_launcher::logging;
use preset_launcher::presets::PresetStore;
use preset_launcher::settings::{app_dir, Settings, SETTINGS_FILE};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let base = app_dir();
    let (settings, settings_err) = match Settings::load(base.join(SETTINGS_FILE)) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(settings.debug_logging, settings.log_path(&base).as_deref());
    if let Some(e) = settings_err {
        tracing::warn!("{e:#}; using default settings");
    }

    let store = PresetStore::new(settings.presets_path(&base));
    tracing::debug!(path = %store.path().display(), "using preset store");

    if let Some(name) = args.run {
        let results = cli::run_preset(&store, &name, &SystemLauncher)?;
        if let Some(report) = failure_report(&results) {
            eprintln!("Some items failed to launch:\n\n{report}");
        }
        return Ok(());
    }

    let app = PresetApp::new(store, Box::new(SystemLauncher), &settings);
    gui::run(app, &settings)
}
