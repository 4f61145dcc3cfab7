use eframe::egui;

/// Raw user input collected by [`AddPresetDialog`]. Validation happens in
/// [`crate::presets::add_preset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPreset {
    pub name: String,
    pub commands: String,
}

#[derive(Debug, Default)]
pub struct AddPresetDialog {
    pub open: bool,
    name: String,
    commands: String,
    error: Option<String>,
}

impl AddPresetDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Close the dialog and forget the entered values.
    pub fn finish(&mut self) {
        self.open = false;
        self.name.clear();
        self.commands.clear();
        self.error = None;
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<NewPreset> {
        if !self.open {
            return None;
        }
        let mut submitted = None;
        let mut open = self.open;
        let mut cancel = false;
        egui::Window::new("Add Preset")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Enter a name for the preset:");
                ui.text_edit_singleline(&mut self.name);
                ui.label("Enter the commands for the preset (separated by commas):");
                ui.text_edit_multiline(&mut self.commands);
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        submitted = Some(NewPreset {
                            name: self.name.clone(),
                            commands: self.commands.clone(),
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if cancel || !open {
            self.finish();
        }
        submitted
    }
}
