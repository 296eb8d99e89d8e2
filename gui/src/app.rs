use eframe::egui;
use glyph_rendr::palette::PaletteKind;
use glyph_rendr::present::{EXPORT_FILE_NAME, write_text_file};
use glyph_rendr::{
    GlyphArt, MAX_WIDTH, MIN_WIDTH, Rasterizer, RenderConfig, RenderRequest, Resampling, Source,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main application state for the glyph renderer GUI
pub struct GlyphApp {
    rasterizer: Rasterizer,
    /// Encoded bytes of the picked image, if any
    image_bytes: Option<Vec<u8>>,
    image_path: Option<PathBuf>,
    /// Fallback input when no image is loaded
    text: String,
    config: RenderConfig,

    output: Option<GlyphArt>,

    /// Re-render whenever a control changes
    auto_process: bool,
    needs_reprocess: bool,

    last_process_time_ms: f64,
    /// Single message line shown above the output
    status: Option<Status>,
}

enum Status {
    Info(String),
    Error(String),
}

impl Default for GlyphApp {
    fn default() -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            image_bytes: None,
            image_path: None,
            text: String::new(),
            config: RenderConfig::default(),
            output: None,
            auto_process: false,
            needs_reprocess: false,
            last_process_time_ms: 0.0,
            status: None,
        }
    }
}

impl GlyphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Read an image file; decoding happens at render time
    pub fn load_image(&mut self, path: &Path) {
        match std::fs::read(path) {
            Ok(bytes) => {
                log::info!("loaded {} ({} bytes)", path.display(), bytes.len());
                self.image_bytes = Some(bytes);
                self.image_path = Some(path.to_path_buf());
                self.needs_reprocess = true;
                self.status = None;
            }
            Err(e) => {
                log::error!("failed to read {}: {}", path.display(), e);
                self.status = Some(Status::Error(format!("Failed to load image: {}", e)));
            }
        }
    }

    fn clear_image(&mut self) {
        self.image_bytes = None;
        self.image_path = None;
        self.needs_reprocess = true;
    }

    fn request(&self) -> RenderRequest {
        let source = if let Some(bytes) = &self.image_bytes {
            Source::Image(bytes.clone())
        } else if !self.text.trim().is_empty() {
            Source::Text(self.text.clone())
        } else {
            Source::Empty
        };

        RenderRequest {
            source,
            config: self.config.clone(),
        }
    }

    /// Render the current input with the current configuration
    fn process(&mut self) {
        let start = Instant::now();
        self.needs_reprocess = false;

        match self.rasterizer.render_request(&self.request()) {
            Ok(art) => {
                self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.output = Some(art);
                self.status = None;
            }
            Err(e) => {
                log::error!("render failed: {}", e);
                self.output = None;
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn copy_output(&mut self, ui: &egui::Ui) {
        if let Some(art) = &self.output {
            let text = art.to_text();
            ui.output_mut(|o| o.copied_text = text);
            self.status = Some(Status::Info("Copied to clipboard".to_string()));
        }
    }

    fn save_output(&mut self) {
        let Some(art) = &self.output else {
            self.status = Some(Status::Error("Nothing to save yet".to_string()));
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        self.status = Some(match write_text_file(art, &path) {
            Ok(()) => Status::Info(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("export failed: {}", e);
                Status::Error(e.to_string())
            }
        });
    }

    fn pick_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .pick_file()
        {
            self.load_image(&path);
        }
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Input");
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Open Image...").clicked() {
                self.pick_image();
                changed = true;
            }
            if self.image_bytes.is_some() && ui.button("Clear").clicked() {
                self.clear_image();
                changed = true;
            }
        });

        match &self.image_path {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.label(name);
            }
            None => {
                ui.label("No image loaded");
            }
        }

        ui.add_space(4.0);
        ui.label("Text (used when no image is loaded)");
        changed |= ui.text_edit_singleline(&mut self.text).changed();

        ui.add_space(8.0);
        ui.heading("Options");
        ui.separator();

        changed |= ui
            .add(egui::Slider::new(&mut self.config.width, MIN_WIDTH..=MAX_WIDTH).text("Width"))
            .on_hover_text("Number of glyph columns")
            .changed();

        egui::ComboBox::from_label("Palette")
            .selected_text(self.config.palette.clone())
            .show_ui(ui, |ui| {
                for kind in PaletteKind::all() {
                    changed |= ui
                        .selectable_value(&mut self.config.palette, kind.name().to_string(), kind.name())
                        .changed();
                }
            });

        changed |= ui
            .checkbox(&mut self.config.invert, "Invert")
            .on_hover_text("Reverse the palette: dark glyphs for bright pixels")
            .changed();

        ui.collapsing("Resampling", |ui| {
            for method in Resampling::all() {
                changed |= ui
                    .radio_value(&mut self.config.resampling, *method, method.name())
                    .changed();
            }
        });

        ui.add_space(16.0);
        ui.separator();

        ui.checkbox(&mut self.auto_process, "Auto-generate")
            .on_hover_text("Regenerate when parameters change");

        if ui.button("Generate").clicked() {
            self.process();
        }

        ui.horizontal(|ui| {
            ui.add_enabled_ui(self.output.is_some(), |ui| {
                if ui.button("Copy").clicked() {
                    self.copy_output(ui);
                }
                if ui.button("Save .txt...").clicked() {
                    self.save_output();
                }
            });
        });

        if self.last_process_time_ms > 0.0 {
            ui.label(format!("Last render: {:.1} ms", self.last_process_time_ms));
        }

        changed
    }

    /// Lay out coloured cells as one monospace text job
    fn colored_job(art: &GlyphArt, default_color: egui::Color32) -> egui::text::LayoutJob {
        let mut job = egui::text::LayoutJob::default();
        let font = egui::FontId::monospace(10.0);
        let mut glyph = [0u8; 4];

        for row in art.rows() {
            for cell in row {
                let color = cell
                    .color
                    .map(|[r, g, b]| egui::Color32::from_rgb(r, g, b))
                    .unwrap_or(default_color);
                job.append(
                    cell.glyph.encode_utf8(&mut glyph),
                    0.0,
                    egui::TextFormat::simple(font.clone(), color),
                );
            }
            job.append("\n", 0.0, egui::TextFormat::simple(font.clone(), default_color));
        }

        job
    }

    fn display_output(&self, ui: &mut egui::Ui) {
        let Some(art) = &self.output else {
            ui.label("Nothing generated yet");
            return;
        };

        ui.label(format!("{} x {}", art.columns(), art.row_count()));
        ui.separator();

        egui::ScrollArea::both().show(ui, |ui| {
            if art.has_color() {
                let job = Self::colored_job(art, ui.visuals().text_color());
                ui.label(job);
            } else {
                ui.label(
                    egui::RichText::new(art.to_text())
                        .font(egui::FontId::monospace(10.0)),
                );
            }
        });
    }
}

impl eframe::App for GlyphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.pick_image();
                        ui.close_menu();
                    }

                    if ui.button("Save Output...").clicked() {
                        self.save_output();
                        ui.close_menu();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.needs_reprocess = true;
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.status {
                Some(Status::Error(msg)) => {
                    ui.colored_label(egui::Color32::RED, msg);
                }
                Some(Status::Info(msg)) => {
                    ui.label(msg);
                }
                None => {}
            }

            if self.auto_process && self.needs_reprocess {
                self.process();
            }

            self.display_output(ui);
        });
    }
}
