mod add_preset_dialog;
mod confirmation_modal;

pub use add_preset_dialog::{AddPresetDialog, NewPreset};
pub use confirmation_modal::{ConfirmationModal, ConfirmationResult};

use crate::launcher::{failure_report, run_batch, LaunchResult, Launcher};
use crate::presets::{self, PresetStore, Presets, StoreError};
use crate::settings::Settings;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Message window that stays until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

pub struct PresetApp {
    store: PresetStore,
    presets: Presets,
    selected: Option<String>,
    launcher: Box<dyn Launcher>,
    add_dialog: AddPresetDialog,
    confirm: ConfirmationModal,
    notice: Option<Notice>,
    status: Option<String>,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f32,
    confirm_delete: bool,
}

impl PresetApp {
    /// Create the window state and load the store. A load failure is shown
    /// to the user and leaves the list empty until a successful reload.
    pub fn new(store: PresetStore, launcher: Box<dyn Launcher>, settings: &Settings) -> Self {
        let mut app = Self {
            store,
            presets: Presets::new(),
            selected: None,
            launcher,
            add_dialog: AddPresetDialog::default(),
            confirm: ConfirmationModal::default(),
            notice: None,
            status: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            confirm_delete: settings.confirm_delete,
        };
        match app.store.load() {
            Ok(p) => app.presets = p,
            Err(e) => app.show_notice(NoticeKind::Error, "Error loading presets", e.to_string()),
        }
        app
    }

    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    pub fn names(&self) -> Vec<&str> {
        presets::list_names(&self.presets)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, name: &str) {
        if self.presets.contains_key(name) {
            self.selected = Some(name.to_owned());
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Last informational message shown in the status line.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn show_notice(&mut self, kind: NoticeKind, title: &str, body: String) {
        match kind {
            NoticeKind::Error => tracing::error!("{title}: {body}"),
            NoticeKind::Warning => tracing::warn!("{title}: {body}"),
            NoticeKind::Info => tracing::info!("{title}: {body}"),
        }
        self.notice = Some(Notice {
            kind,
            title: title.to_owned(),
            body,
        });
    }

    fn show_info(&mut self, msg: String) {
        tracing::info!("{msg}");
        if self.enable_toasts {
            self.toasts.add(Toast {
                text: msg.clone().into(),
                kind: ToastKind::Success,
                options: ToastOptions::default().duration_in_seconds(self.toast_duration as f64),
            });
        }
        self.status = Some(msg);
    }

    /// Launch the selected preset. Returns the batch results, or `None` when
    /// nothing was selected.
    pub fn run_selected(&mut self) -> Option<Vec<LaunchResult>> {
        let Some(name) = self.selected.clone() else {
            self.show_notice(NoticeKind::Info, "No selection", "Pick a preset.".into());
            return None;
        };
        let commands = self.presets.get(&name).cloned().unwrap_or_default();
        let results = run_batch(self.launcher.as_ref(), &commands);
        if let Some(report) = failure_report(&results) {
            self.show_notice(NoticeKind::Warning, "Some items failed to launch", report);
        } else {
            self.status = Some(format!("Launched '{name}'"));
        }
        Some(results)
    }

    /// Replace the in-memory presets with the file contents. On failure the
    /// current presets are kept.
    pub fn reload(&mut self) -> bool {
        match self.store.load() {
            Ok(p) => {
                self.presets = p;
                if let Some(sel) = &self.selected {
                    if !self.presets.contains_key(sel) {
                        self.selected = None;
                    }
                }
                self.show_info("Presets reloaded from file.".into());
                true
            }
            Err(e) => {
                self.show_notice(NoticeKind::Error, "Reload failed", e.to_string());
                false
            }
        }
    }

    /// Add a preset and persist the store. Validation errors leave the
    /// presets untouched; a failed save keeps the new preset in memory only.
    pub fn add(&mut self, name: &str, commands: &str) -> Result<(), StoreError> {
        presets::add_preset(&mut self.presets, name, commands)?;
        let name = name.trim().to_owned();
        self.store.save(&self.presets)?;
        self.selected = Some(name.clone());
        self.show_info(format!("Preset '{name}' added!"));
        Ok(())
    }

    /// Start deleting the selected preset, asking first when configured to.
    pub fn request_delete(&mut self) {
        let Some(name) = self.selected.clone() else {
            self.show_notice(
                NoticeKind::Info,
                "Pick a preset",
                "Select a preset to delete.".into(),
            );
            return;
        };
        if self.confirm_delete {
            self.confirm.open_for(&name);
        } else {
            self.delete(&name);
        }
    }

    /// Remove `name` and persist the store. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) {
        if !presets::delete_preset(&mut self.presets, name) {
            return;
        }
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        match self.store.save(&self.presets) {
            Ok(()) => self.show_info(format!("Preset '{name}' deleted")),
            Err(e) => self.show_notice(NoticeKind::Error, "Save failed", e.to_string()),
        }
    }

    pub fn open_config(&mut self) {
        if let Err(e) = self.store.open_in_editor() {
            self.show_notice(NoticeKind::Error, "Error opening config", e.to_string());
        }
    }

    fn submit_new_preset(&mut self, req: NewPreset) {
        match self.add(&req.name, &req.commands) {
            Ok(()) => self.add_dialog.finish(),
            Err(e @ StoreError::Io { .. }) => {
                self.add_dialog.finish();
                self.show_notice(NoticeKind::Error, "Save failed", e.to_string());
            }
            Err(e) => self.add_dialog.set_error(e.to_string()),
        }
    }

    fn preset_list(&mut self, ui: &mut egui::Ui) {
        let names: Vec<String> = self.names().into_iter().map(str::to_owned).collect();
        egui::ScrollArea::vertical()
            .max_height(280.0)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for name in names {
                    let selected = self.selected.as_deref() == Some(name.as_str());
                    let resp = ui.selectable_label(selected, &name);
                    if resp.clicked() {
                        self.selected = Some(name.clone());
                    }
                    if resp.double_clicked() {
                        self.selected = Some(name);
                        self.run_selected();
                    }
                }
            });
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let color = match notice.kind {
            NoticeKind::Info => ctx.style().visuals.text_color(),
            NoticeKind::Warning => egui::Color32::YELLOW,
            NoticeKind::Error => egui::Color32::RED,
        };
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(notice.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    ui.colored_label(color, &notice.body);
                });
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || !open {
            self.notice = None;
        }
    }
}

impl eframe::App for PresetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Select a preset and click Run");
            ui.separator();
            self.preset_list(ui);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Run").clicked() {
                    self.run_selected();
                }
                if ui.button("Open Config").clicked() {
                    self.open_config();
                }
                if ui.button("Reload").clicked() {
                    self.reload();
                }
                if ui.button("+ New Preset").clicked() {
                    self.add_dialog.open();
                }
            });
            if ui.button("Delete Preset").clicked() {
                self.request_delete();
            }
            if let Some(status) = &self.status {
                ui.small(status);
            }
        });

        let modal_open = self.add_dialog.open || self.confirm.is_open() || self.notice.is_some();
        if !modal_open && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.run_selected();
        }

        if let Some(req) = self.add_dialog.ui(ctx) {
            self.submit_new_preset(req);
        }
        if self.confirm.ui(ctx) == ConfirmationResult::Confirmed {
            let name = self.confirm.target().to_owned();
            self.delete(&name);
        }
        self.notice_window(ctx);

        if self.enable_toasts {
            self.toasts.show(ctx);
        }
    }
}

/// Open the main window and block until it is closed.
pub fn run(app: PresetApp, settings: &Settings) -> anyhow::Result<()> {
    let (w, h) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w, h])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Preset Launcher",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to open window: {e}"))
}
