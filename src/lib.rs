pub mod cli;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod presets;
pub mod settings;
