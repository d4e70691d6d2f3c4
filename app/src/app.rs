use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use eframe::egui;
use log::{error, info, warn};

use crate::config::{self, AppConfig};
use crate::node::{self, GradeNode};

/// Top-level application: one grade node on a canvas, preset persistence,
/// and the reset flow.
pub struct GradeApp {
    node: GradeNode,
    config: AppConfig,
    reset_prompt_open: bool,
}

impl GradeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            node: GradeNode::new(&cc.egui_ctx),
            config: config::load_config(),
            reset_prompt_open: false,
        }
    }

    fn preset_dialog(&self) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new().add_filter("Grade preset", &["json"]);
        if let Some(dir) = &self.config.last_preset_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    fn save_preset(&mut self) {
        let Some(path) = self.preset_dialog().save_file() else {
            return;
        };
        match self.write_preset(&path) {
            Ok(()) => {
                info!("Saved grade preset to {}", path.display());
                self.remember_dir(&path);
            }
            Err(e) => error!("Failed to save preset: {:#}", e),
        }
    }

    fn write_preset(&self, path: &Path) -> Result<()> {
        let bag = self.node.to_properties().context("serializing grade values")?;
        let json = serde_json::to_string_pretty(&bag).context("formatting preset")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn load_preset(&mut self) {
        let Some(path) = self.preset_dialog().pick_file() else {
            return;
        };
        match read_preset(&path) {
            Ok(bag) => {
                self.node.configure(&bag);
                info!("Loaded grade preset from {}", path.display());
                self.remember_dir(&path);
            }
            Err(e) => warn!("Failed to load preset: {:#}", e),
        }
    }

    fn remember_dir(&mut self, path: &Path) {
        self.config.last_preset_dir = path.parent().map(PathBuf::from);
        config::save_config(&self.config);
    }

    fn request_reset(&mut self) {
        if self.config.confirm_reset {
            self.reset_prompt_open = true;
        } else {
            self.node.reset();
        }
    }

    fn show_reset_prompt(&mut self, ctx: &egui::Context) {
        if !self.reset_prompt_open {
            return;
        }
        egui::Window::new("Reset Adjustments")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Reset all color adjustments to their defaults?");
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        self.node.reset();
                        self.reset_prompt_open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.reset_prompt_open = false;
                    }
                });
            });
    }
}

fn read_preset(path: &Path) -> Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).context("parsing preset")
}

impl eframe::App for GradeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save Preset…").clicked() {
                        self.save_preset();
                        ui.close();
                    }
                    if ui.button("Load Preset…").clicked() {
                        self.load_preset();
                        ui.close();
                    }
                });
                ui.menu_button("Grade", |ui| {
                    if ui.button("Reset Adjustments").clicked() {
                        self.request_reset();
                        ui.close();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.node.show(ui);
            ui.separator();
            egui::CollapsingHeader::new("Numeric values")
                .default_open(false)
                .show(ui, |ui| node::numeric::show(&mut self.node, ui));
        });

        self.show_reset_prompt(ctx);
    }
}
