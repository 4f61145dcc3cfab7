use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResult {
    None,
    Confirmed,
    Cancelled,
}

/// Yes/no window guarding preset deletion.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationModal {
    open: bool,
    target: String,
}

impl ConfirmationModal {
    pub fn open_for(&mut self, preset: &str) {
        self.target = preset.to_owned();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Name of the preset the modal was opened for.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ConfirmationResult {
        if !self.open {
            return ConfirmationResult::None;
        }
        let mut result = ConfirmationResult::None;
        let mut open = true;
        egui::Window::new("Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!("Delete preset '{}'?", self.target));
                ui.colored_label(egui::Color32::YELLOW, "This action cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        result = ConfirmationResult::Confirmed;
                    }
                    if ui.button("Cancel").clicked() {
                        result = ConfirmationResult::Cancelled;
                    }
                });
            });
        if result != ConfirmationResult::None {
            self.open = false;
        }
        if !open {
            self.open = false;
            if result == ConfirmationResult::None {
                result = ConfirmationResult::Cancelled;
            }
        }
        result
    }
}
