use std::error::Error;

use scanfill::prelude::*;
use scanfill::render::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

const COLOR_BACKGROUND: u32 = 0xFF202020;
const COLOR_TRIANGLE: u32 = 0xFFE04040;
const COLOR_STAR: u32 = 0xFFF0C020;
const COLOR_NOTCHED: u32 = 0xFF40A0E0;
const COLOR_CLIPPED: u32 = 0xFF60C060;

fn star_vertices(points: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = (90.0 + i as f32 * 180.0 / points as f32).to_radians();
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scanfill.png".to_string());

    let mut pipeline = Pipeline::with_canvas(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
    pipeline.sink_mut().clear(COLOR_BACKGROUND);

    // World coordinates: a 0..600 square.
    pipeline.set_clip_window(0.0, 600.0, 0.0, 600.0);
    pipeline.set_viewport(
        0,
        0,
        DEFAULT_CANVAS_WIDTH as i32,
        DEFAULT_CANVAS_HEIGHT as i32,
    );

    let triangle = pipeline.add_polygon(&[
        Vec2::new(-50.0, -40.0),
        Vec2::new(50.0, -40.0),
        Vec2::new(0.0, 60.0),
    ])?;
    let star = pipeline.add_polygon(&star_vertices(5, 80.0, 32.0))?;
    let notched = pipeline.add_polygon(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(120.0, 0.0),
        Vec2::new(120.0, 90.0),
        Vec2::new(80.0, 90.0),
        Vec2::new(80.0, 40.0),
        Vec2::new(40.0, 40.0),
        Vec2::new(40.0, 90.0),
        Vec2::new(0.0, 90.0),
    ])?;

    pipeline.sink_mut().set_color(COLOR_TRIANGLE);
    pipeline.translate(120.0, 460.0);
    pipeline.draw_polygon(triangle)?;

    pipeline.clear_transform();
    pipeline.scale(1.5, 0.75);
    pipeline.rotate(-30.0);
    pipeline.translate(420.0, 460.0);
    pipeline.draw_polygon(triangle)?;

    pipeline.sink_mut().set_color(COLOR_STAR);
    pipeline.clear_transform();
    pipeline.translate(300.0, 300.0);
    pipeline.draw_polygon(star)?;

    pipeline.sink_mut().set_color(COLOR_NOTCHED);
    pipeline.clear_transform();
    pipeline.translate(60.0, 60.0);
    pipeline.draw_polygon(notched)?;

    // Hangs off the right edge of the clip window.
    pipeline.sink_mut().set_color(COLOR_CLIPPED);
    pipeline.clear_transform();
    pipeline.scale(2.0, 2.0);
    pipeline.rotate(15.0);
    pipeline.translate(520.0, 80.0);
    pipeline.draw_polygon(notched)?;

    println!(
        "Drew {} polygons into a {}x{} canvas",
        pipeline.polygon_count(),
        DEFAULT_CANVAS_WIDTH,
        DEFAULT_CANVAS_HEIGHT
    );

    pipeline.sink().save_png(&output)?;
    println!("Wrote {}", output);

    Ok(())
}
