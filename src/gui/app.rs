//! The eframe application.

use crate::controller::{Controller, Flow, Intent};
use crate::output::{MessageLevel, StatusLine};

/// Keyboard accelerators, checked once per frame.
fn shortcuts() -> [(egui::Modifiers, egui::Key, Intent); 8] {
    [
        (egui::Modifiers::ALT, egui::Key::M, Intent::Merge),
        (egui::Modifiers::ALT, egui::Key::C, Intent::Clear),
        (egui::Modifiers::ALT, egui::Key::O, Intent::Open),
        (egui::Modifiers::NONE, egui::Key::Delete, Intent::Delete),
        (egui::Modifiers::ALT, egui::Key::X, Intent::Exit),
        (egui::Modifiers::NONE, egui::Key::End, Intent::Exit),
        (egui::Modifiers::NONE, egui::Key::F1, Intent::Help),
        (egui::Modifiers::NONE, egui::Key::F2, Intent::About),
    ]
}

/// The merge window.
pub struct MergeApp {
    controller: Controller,
    pending: Vec<Intent>,
}

impl MergeApp {
    /// Wrap a controller in a window.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            pending: Vec::new(),
        }
    }

    fn read_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input_mut(|input| {
            for (modifiers, key, intent) in shortcuts() {
                if input.consume_key(modifiers, key) {
                    self.pending.push(intent);
                }
            }
        });
    }

    fn pick_target(&mut self) {
        let dialog = rfd::FileDialog::new().set_title("Save merged PDF as");
        let dialog = match self.controller.session().working_folder() {
            Some(folder) => dialog.set_directory(folder),
            None => dialog,
        };

        if let Some(path) = dialog.save_file() {
            self.pending.push(Intent::ChoosePath(path));
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save As...").clicked() {
                    self.pick_target();
                }
                if ui.button("Properties").clicked() {
                    self.pending.push(Intent::Properties);
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    self.pending.push(Intent::Exit);
                }
            });

            ui.menu_button("Actions", |ui| {
                if ui.button("Merge").clicked() {
                    self.pending.push(Intent::Merge);
                }
                if ui.button("Clear").clicked() {
                    self.pending.push(Intent::Clear);
                }
                if ui
                    .add_enabled(self.controller.board().open_enabled, egui::Button::new("Open"))
                    .clicked()
                {
                    self.pending.push(Intent::Open);
                }
                if ui.button("Delete").clicked() {
                    self.pending.push(Intent::Delete);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Help").clicked() {
                    self.pending.push(Intent::Help);
                }
                if ui.button("About").clicked() {
                    self.pending.push(Intent::About);
                }
            });
        });
    }

    fn body(&mut self, ui: &mut egui::Ui) {
        let board = self.controller.board().clone();

        ui.label(egui::RichText::new("Merged file").strong());
        ui.horizontal(|ui| {
            let mut target = board.target.as_str();
            ui.add(
                egui::TextEdit::singleline(&mut target)
                    .hint_text("Choose where to save the merged file")
                    .desired_width(ui.available_width() - 100.0),
            );
            if ui.button("Save As...").clicked() {
                self.pick_target();
            }
        });
        ui.add_space(6.0);

        status_region(ui, "Information", &board.info);
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Files to Merge").strong());
            let mut files = board.file_list.text.as_str();
            egui::ScrollArea::vertical()
                .max_height(180.0)
                .show(ui, |ui| {
                    let mut edit = egui::TextEdit::multiline(&mut files)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY);
                    if let Some(color) = level_color(board.file_list.level) {
                        edit = edit.text_color(color);
                    }
                    ui.add(edit);
                });
        });
        ui.add_space(6.0);

        status_region(ui, "Result", &board.result);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("Merge").clicked() {
                self.pending.push(Intent::Merge);
            }
            if ui.button("Clear").clicked() {
                self.pending.push(Intent::Clear);
            }
            if ui
                .add_enabled(board.open_enabled, egui::Button::new("Open"))
                .clicked()
            {
                self.pending.push(Intent::Open);
            }
            if ui.button("Delete").clicked() {
                self.pending.push(Intent::Delete);
            }
            if ui.button("Exit").clicked() {
                self.pending.push(Intent::Exit);
            }
        });
    }
}

impl eframe::App for MergeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.read_shortcuts(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.menu_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.body(ui));

        for intent in std::mem::take(&mut self.pending) {
            if self.controller.dispatch(intent) == Flow::Exit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                break;
            }
        }
    }
}

fn level_color(level: MessageLevel) -> Option<egui::Color32> {
    match level {
        MessageLevel::Info => None,
        MessageLevel::Success => Some(egui::Color32::from_rgb(67, 181, 129)),
        MessageLevel::Warning => Some(egui::Color32::from_rgb(230, 170, 60)),
        MessageLevel::Error => Some(egui::Color32::from_rgb(220, 80, 80)),
        MessageLevel::Notice => Some(egui::Color32::LIGHT_BLUE),
    }
}

fn status_region(ui: &mut egui::Ui, title: &str, line: &StatusLine) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(title).strong());

        let mut text = egui::RichText::new(line.decorated());
        if let Some(color) = level_color(line.level) {
            text = text.color(color);
        }
        ui.label(text);
    });
}
