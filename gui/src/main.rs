mod app;

use app::GlyphApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging (RUST_LOG=debug shows per-render grid sizes)
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Glyph Renderer")
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Glyph Renderer",
        options,
        Box::new(|cc| Box::new(GlyphApp::new(cc))),
    )
}

/// 32x32 icon: a shaded ring from the block palette
fn load_icon() -> egui::IconData {
    let icon_size = 32usize;
    let mut pixels = Vec::with_capacity(icon_size * icon_size * 4);
    let center = icon_size as f32 / 2.0 - 0.5;

    for y in 0..icon_size {
        for x in 0..icon_size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();

            // Bright ring fading outwards on a dark background
            let shade = if (9.0..14.0).contains(&dist) {
                255 - ((dist - 9.0) * 30.0) as u8
            } else {
                24
            };
            pixels.extend_from_slice(&[shade, shade, shade, 255]);
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
