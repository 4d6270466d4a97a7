//! The fixed legend strip shown next to every index image.
//!
//! Layout: a white 240x40 canvas, one swatch per class from x=10 whose width
//! is the class span over `[-1, 1]` at 60 px per unit, 2 px steps between
//! swatches, and tick labels along the bottom edge drawn in DejaVu Sans Mono.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};

use crate::classify::CLASSES;
use crate::error::{RenderError, Result};
use crate::png::create_png_auto;

pub const LEGEND_WIDTH: u32 = 240;
pub const LEGEND_HEIGHT: u32 = 40;

const SWATCH_LEFT: u32 = 10;
const SWATCH_TOP: u32 = 10;
const SWATCH_BOTTOM: u32 = 30;
const PIXELS_PER_UNIT: f64 = 60.0;
const SWATCH_GAP: u32 = 2;

const LABEL_Y: u32 = 32;
const LABEL_SIZE: f32 = 10.0;

/// Tick labels and their x positions.
pub const TICKS: [(u32, &str); 5] = [(12, "-1"), (55, "0"), (95, "0.2"), (140, "0.5"), (190, "1")];

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Horizontal extent of each swatch as `(left, right)`, both inclusive.
pub fn swatch_columns() -> Vec<(u32, u32)> {
    let mut left = SWATCH_LEFT;
    CLASSES
        .iter()
        .map(|class| {
            let width = (class.span() * PIXELS_PER_UNIT) as u32;
            let columns = (left, left + width);
            left += width + SWATCH_GAP;
            columns
        })
        .collect()
}

/// DejaVu Sans Mono for the tick labels.
fn label_font() -> Result<Font<'static>> {
    Font::try_from_bytes(dejavu::sans_mono::regular()).ok_or(RenderError::Font)
}

/// Draw the legend.
pub fn render_legend() -> Result<RgbImage> {
    let font = label_font()?;
    let scale = Scale::uniform(LABEL_SIZE);
    let mut image = RgbImage::from_pixel(LEGEND_WIDTH, LEGEND_HEIGHT, BACKGROUND);

    for (class, (left, right)) in CLASSES.iter().zip(swatch_columns()) {
        let rect = Rect::at(left as i32, SWATCH_TOP as i32)
            .of_size(right - left + 1, SWATCH_BOTTOM - SWATCH_TOP + 1);
        draw_filled_rect_mut(&mut image, rect, Rgb(class.color));
    }

    for (x, label) in TICKS {
        draw_text_mut(&mut image, TEXT_COLOR, x as i32, LABEL_Y as i32, scale, &font, label);
    }

    Ok(image)
}

/// Draw the legend and encode it as PNG.
pub fn render_legend_png() -> Result<Vec<u8>> {
    let legend = render_legend()?;
    let (width, height) = legend.dimensions();

    let rgba: Vec<u8> = legend
        .pixels()
        .flat_map(|Rgb([r, g, b])| [*r, *g, *b, 255])
        .collect();

    create_png_auto(&rgba, width as usize, height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_layout() {
        assert_eq!(
            swatch_columns(),
            vec![(10, 70), (72, 84), (86, 104), (106, 124), (126, 137)]
        );
    }

    #[test]
    fn test_swatch_colors() {
        let legend = render_legend().unwrap();
        for (class, (left, right)) in CLASSES.iter().zip(swatch_columns()) {
            assert_eq!(legend.get_pixel(left, SWATCH_TOP).0, class.color);
            assert_eq!(legend.get_pixel(right, SWATCH_BOTTOM).0, class.color);
        }
        // Gap column between the first two swatches stays white
        assert_eq!(*legend.get_pixel(71, 20), BACKGROUND);
        assert_eq!(*legend.get_pixel(5, 5), BACKGROUND);
    }

    #[test]
    fn test_labels_are_drawn() {
        let legend = render_legend().unwrap();
        for (x, label) in TICKS {
            // Monospace advance is roughly 0.6 em
            let width = (label.len() as f32 * LABEL_SIZE * 0.6).ceil() as u32;
            let inked = (x..x + width)
                .flat_map(|px| (LABEL_Y..LEGEND_HEIGHT).map(move |py| (px, py)))
                .any(|(px, py)| *legend.get_pixel(px, py) != BACKGROUND);
            assert!(inked, "label {} missing", label);
        }
    }

    #[test]
    fn test_label_font_loads() {
        let font = label_font().unwrap();
        assert!(font.glyph_count() > 0);
    }

    #[test]
    fn test_labels_stay_below_swatches() {
        let legend = render_legend().unwrap();
        // Row between the swatch bottom and the labels is untouched
        assert!((0..LEGEND_WIDTH)
            .filter(|x| !swatch_columns().iter().any(|(l, r)| (*l..=*r).contains(x)))
            .all(|x| *legend.get_pixel(x, SWATCH_BOTTOM) == BACKGROUND));
    }
}
