/// Basic example: Convert a generated test image to glyph art
///
/// Draws a circle over a gradient, then prints it with every palette.
/// Run with `cargo run --example basic -- [width]`.
use glyph_rendr::palette::PaletteKind;
use glyph_rendr::present::to_ansi;
use glyph_rendr::{Rasterizer, RenderConfig, text_box};
use image::{Rgba, RgbaImage};

fn main() {
    let width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(60);

    println!("Glyph Renderer - Basic Example");
    println!("==============================\n");

    // 160x120 test image: horizontal gradient with a bright circle
    let (img_w, img_h) = (160, 120);
    let center_x = img_w as f32 / 2.0;
    let center_y = img_h as f32 / 2.0;
    let radius = 40.0;

    let img = RgbaImage::from_fn(img_w, img_h, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        if (dx * dx + dy * dy).sqrt() < radius {
            Rgba([255, 200, 40, 255])
        } else {
            let v = (x * 255 / (img_w - 1)) as u8;
            Rgba([v / 3, v / 2, v, 255])
        }
    });

    let rasterizer = Rasterizer::new();

    for kind in PaletteKind::all() {
        let config = RenderConfig {
            width,
            palette: kind.name().to_string(),
            ..Default::default()
        };

        match rasterizer.render_with(&img, &config) {
            Ok(art) => {
                println!("[{}] {}x{}", kind, art.columns(), art.row_count());
                if art.has_color() {
                    print!("{}", to_ansi(&art));
                } else {
                    print!("{}", art.to_text());
                }
                println!();
            }
            Err(e) => eprintln!("[{}] {}", kind, e),
        }
    }

    match text_box("glyph-rendr", width, '@', ' ') {
        Ok(lines) => println!("{}", lines.join("\n")),
        Err(e) => eprintln!("{}", e),
    }
}
