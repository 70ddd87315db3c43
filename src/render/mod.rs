//! Spawn image composition.
//!
//! Draws one card per slot side by side: a dark rounded body, a border in the rarity
//! color, the card art scaled into the art box, a name plate with the card name and
//! rarity, and a rarity marker in the top-right corner. Art in any catalog format is
//! decoded with `image`; unreadable files get a grey "No Image" placeholder.

mod text;

use std::path::{Path, PathBuf};

use tiny_skia::{
    Color, ColorU8, FillRule, FilterQuality, Paint, Path as SkiaPath, PathBuilder, Pixmap,
    PixmapPaint, Rect, Stroke, Transform,
};

use self::text::{draw_centered, plate_label, TextStyle};

use crate::{
    error::{render::RenderError, AppError},
    model::{rarity::Rarity, spawned_card::SpawnSlot},
};

const CARD_WIDTH: u32 = 200;
const CARD_HEIGHT: u32 = 280;
const SPACING: u32 = 20;
const BORDER_WIDTH: f32 = 3.0;
const CORNER_RADIUS: f32 = 10.0;
/// Height reserved below the art for the name plate.
const NAME_PLATE_HEIGHT: f32 = 60.0;
const MARKER_RADIUS: f32 = 8.0;

/// What the renderer needs to know about one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCard {
    pub name: String,
    pub image_path: PathBuf,
    pub rarity: Rarity,
}

impl From<&SpawnSlot> for RenderCard {
    fn from(slot: &SpawnSlot) -> Self {
        Self {
            name: slot.card.name.clone(),
            image_path: PathBuf::from(&slot.card.image_path),
            rarity: slot.slot.rarity,
        }
    }
}

/// Renders a spawn image on the blocking thread pool.
///
/// # Arguments
/// - `cards` - Slots in button order
///
/// # Returns
/// - `Ok(Vec<u8>)` - PNG bytes
/// - `Err(AppError::RenderErr)` - Nothing to draw or encoding failed
/// - `Err(AppError::JoinErr)` - The blocking task panicked
pub async fn render_spawn_image(cards: Vec<RenderCard>) -> Result<Vec<u8>, AppError> {
    let png = tokio::task::spawn_blocking(move || render_spawn(&cards)).await??;

    Ok(png)
}

/// Dimensions of a spawn image holding `count` cards.
pub fn canvas_size(count: usize) -> (u32, u32) {
    let count = count as u32;
    (
        CARD_WIDTH * count + SPACING * (count + 1),
        CARD_HEIGHT + SPACING * 2,
    )
}

/// Renders a spawn image synchronously.
///
/// # Returns
/// - `Ok(Vec<u8>)` - PNG bytes
/// - `Err(RenderError)` - No cards, unallocatable canvas or encoding failure
pub fn render_spawn(cards: &[RenderCard]) -> Result<Vec<u8>, RenderError> {
    if cards.is_empty() {
        return Err(RenderError::NoCards);
    }

    let (width, height) = canvas_size(cards.len());
    let mut canvas = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
    canvas.fill(Color::from_rgba8(26, 26, 26, 255));

    for (index, card) in cards.iter().enumerate() {
        let x = (SPACING + index as u32 * (CARD_WIDTH + SPACING)) as f32;
        let y = SPACING as f32;
        draw_card(&mut canvas, card, x, y);
    }

    canvas
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

fn draw_card(canvas: &mut Pixmap, card: &RenderCard, x: f32, y: f32) {
    let (r, g, b) = card.rarity.rgb();
    let width = CARD_WIDTH as f32;
    let height = CARD_HEIGHT as f32;

    if let Some(body) = rounded_rect(x, y, width, height, CORNER_RADIUS) {
        canvas.fill_path(
            &body,
            &solid(51, 51, 51, 255),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    let art_x = x + BORDER_WIDTH;
    let art_y = y + BORDER_WIDTH;
    let art_width = width - BORDER_WIDTH * 2.0;
    let art_height = height - NAME_PLATE_HEIGHT - BORDER_WIDTH * 2.0;
    draw_art(canvas, &card.image_path, art_x, art_y, art_width, art_height);

    if let Some(plate) = Rect::from_xywh(art_x, art_y + art_height + 10.0, art_width, 28.0) {
        canvas.fill_rect(plate, &solid(r, g, b, 60), Transform::identity(), None);
    }

    let center_x = x + width / 2.0;
    draw_centered(
        canvas,
        &plate_label(&card.name),
        center_x,
        y + height - 30.0,
        TextStyle {
            size: 12.0,
            bold: true,
            rgb: (r, g, b),
        },
    );
    draw_centered(
        canvas,
        card.rarity.display_name(),
        center_x,
        y + height - 12.0,
        TextStyle {
            size: 10.0,
            bold: false,
            rgb: (200, 200, 200),
        },
    );

    if let Some(border) = rounded_rect(x, y, width, height, CORNER_RADIUS) {
        let stroke = Stroke {
            width: BORDER_WIDTH,
            ..Default::default()
        };
        canvas.stroke_path(
            &border,
            &solid(r, g, b, 255),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    if let Some(marker) = PathBuilder::from_circle(x + width - 30.0, y + 15.0, MARKER_RADIUS) {
        canvas.fill_path(
            &marker,
            &solid(r, g, b, 255),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        let outline = Stroke {
            width: 1.0,
            ..Default::default()
        };
        canvas.stroke_path(
            &marker,
            &solid(0, 0, 0, 255),
            &outline,
            Transform::identity(),
            None,
        );
    }
}

/// Draws the art scaled to the box, or a placeholder if it cannot be decoded.
fn draw_art(canvas: &mut Pixmap, image_path: &Path, x: f32, y: f32, width: f32, height: f32) {
    match load_art(image_path) {
        Some(art) => {
            let scale_x = width / art.width() as f32;
            let scale_y = height / art.height() as f32;
            let paint = PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..Default::default()
            };
            canvas.draw_pixmap(
                0,
                0,
                art.as_ref(),
                &paint,
                Transform::from_row(scale_x, 0.0, 0.0, scale_y, x, y),
                None,
            );
        }
        None => {
            if let Some(rect) = Rect::from_xywh(x, y, width, height) {
                canvas.fill_rect(rect, &solid(77, 77, 77, 255), Transform::identity(), None);
            }
            draw_centered(
                canvas,
                "No Image",
                x + width / 2.0,
                y + height / 2.0 + 5.0,
                TextStyle {
                    size: 14.0,
                    bold: false,
                    rgb: (179, 179, 179),
                },
            );
        }
    }
}

fn load_art(image_path: &Path) -> Option<Pixmap> {
    let art = match image::open(image_path) {
        Ok(art) => art.to_rgba8(),
        Err(e) => {
            tracing::warn!("Cannot load card art {}: {}", image_path.display(), e);
            return None;
        }
    };

    let mut pixmap = Pixmap::new(art.width(), art.height())?;
    for (target, source) in pixmap.pixels_mut().iter_mut().zip(art.pixels()) {
        let [r, g, b, a] = source.0;
        *target = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Some(pixmap)
}

fn solid(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Option<SkiaPath> {
    let right = x + width;
    let bottom = y + height;

    let mut pb = PathBuilder::new();
    pb.move_to(x + radius, y);
    pb.line_to(right - radius, y);
    pb.quad_to(right, y, right, y + radius);
    pb.line_to(right, bottom - radius);
    pb.quad_to(right, bottom, right - radius, bottom);
    pb.line_to(x + radius, bottom);
    pb.quad_to(x, bottom, x, bottom - radius);
    pb.line_to(x, y + radius);
    pb.quad_to(x, y, x + radius, y);
    pb.close();
    pb.finish()
}
