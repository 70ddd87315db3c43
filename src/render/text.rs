//! Text drawing on top of tiny-skia pixmaps.
//!
//! Glyphs are shaped and rasterised by cosmic-text from the system fonts. Font discovery
//! is slow, so each blocking worker thread keeps its own `TextPainter` for its lifetime.
//! Without any installed font the text is silently skipped.

use std::cell::RefCell;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use tiny_skia::{Paint, Pixmap, Rect, Transform};

/// Longest name drawn on a card before it is shortened.
const PLATE_NAME_LIMIT: usize = 20;

thread_local! {
    static PAINTER: RefCell<TextPainter> = RefCell::new(TextPainter::new());
}

/// Font size, weight and color of one line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub rgb: (u8, u8, u8),
}

/// Draws one line of text centered on `center_x` with its baseline at `baseline_y`.
pub fn draw_centered(
    canvas: &mut Pixmap,
    text: &str,
    center_x: f32,
    baseline_y: f32,
    style: TextStyle,
) {
    PAINTER.with_borrow_mut(|painter| {
        painter.draw_centered(canvas, text, center_x, baseline_y, style)
    });
}

/// Shortens a card name to fit the name plate.
pub fn plate_label(name: &str) -> String {
    if name.chars().count() > PLATE_NAME_LIMIT {
        let kept: String = name.chars().take(PLATE_NAME_LIMIT - 3).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

struct TextPainter {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextPainter {
    fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    fn draw_centered(
        &mut self,
        canvas: &mut Pixmap,
        text: &str,
        center_x: f32,
        baseline_y: f32,
        style: TextStyle,
    ) {
        let metrics = Metrics::new(style.size, style.size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);

        let weight = if style.bold {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new().family(Family::SansSerif).weight(weight);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let Some((line_width, line_baseline)) = buffer
            .layout_runs()
            .next()
            .map(|run| (run.line_w, run.line_y))
        else {
            return;
        };

        let origin_x = center_x - line_width / 2.0;
        let origin_y = baseline_y - line_baseline;
        let (r, g, b) = style.rgb;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            cosmic_text::Color::rgb(r, g, b),
            |x, y, width, height, color| {
                let Some(rect) = Rect::from_xywh(
                    origin_x + x as f32,
                    origin_y + y as f32,
                    width as f32,
                    height as f32,
                ) else {
                    return;
                };

                let mut paint = Paint::default();
                paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
                canvas.fill_rect(rect, &paint, Transform::identity(), None);
            },
        );
    }
}
