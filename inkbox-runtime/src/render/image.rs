use std::str::FromStr;

use image::{imageops, GrayImage};

use super::draw_rect;
use crate::error::Result;
use crate::graphics::bitmap::{rotate, RESAMPLE};
use crate::graphics::Canvas;
use crate::layout::{BoxRect, Pixel, Size};

/// How an image adapts to the space inside its box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Shrink to fit, keeping the aspect ratio; never enlarges
    #[default]
    Aspect,

    /// Stretch to exactly the available space
    Fill,

    /// Keep the top-left region that fits, without scaling
    Crop,
}
impl FromStr for ResizePolicy {
    type Err = std::convert::Infallible;

    /// Unrecognised names fall back to [`ResizePolicy::Aspect`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "fill" => ResizePolicy::Fill,
            "crop" => ResizePolicy::Crop,
            _ => ResizePolicy::Aspect,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageBoxStyle {
    pub resize: ResizePolicy,
    /// Degrees counter-clockwise, applied before resizing
    pub rotate: f32,
    /// Gap between the box bounds and the image
    pub padding: Pixel,
    /// Border width; `0` draws no border
    pub outline: Pixel,
}

/// Largest size with the source's aspect ratio that fits in `available`;
/// sources that already fit keep their size.
fn shrink_to_fit(source: Size, available: Size) -> Size {
    if source.width <= available.width && source.height <= available.height {
        return source;
    }

    let scale = f64::min(
        available.width as f64 / source.width as f64,
        available.height as f64 / source.height as f64,
    );
    let fit = |side: Pixel, max: Pixel| ((side as f64 * scale).round() as Pixel).clamp(1, max.max(1));

    Size {
        width: fit(source.width, available.width),
        height: fit(source.height, available.height),
    }
}

/// Rotates, then resizes `source` for an interior of `available` pixels.
///
/// This is the pure half of [`render_image`]; the source is never modified.
pub fn transform_image(source: &GrayImage, available: Size, style: &ImageBoxStyle) -> GrayImage {
    let rotated;
    let image = if style.rotate != 0.0 {
        rotated = rotate(source, style.rotate);
        &rotated
    } else {
        source
    };

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }
    if available.width == 0 || available.height == 0 {
        return GrayImage::new(available.width, available.height);
    }

    match style.resize {
        ResizePolicy::Fill => imageops::resize(image, available.width, available.height, RESAMPLE),
        ResizePolicy::Crop => imageops::crop_imm(
            image,
            0,
            0,
            available.width.min(width),
            available.height.min(height),
        )
        .to_image(),
        ResizePolicy::Aspect => {
            let target = shrink_to_fit(Size { width, height }, available);
            if (target.width, target.height) == (width, height) {
                image.clone()
            } else {
                imageops::resize(image, target.width, target.height, RESAMPLE)
            }
        }
    }
}

/// Paints `source` into `rect`.
///
/// With a non-zero `outline`, the box bounds are stroked first. The transformed image
/// is then pasted with its top-left corner at the padded origin of the box.
pub fn render_image(
    canvas: &mut Canvas,
    source: &GrayImage,
    rect: BoxRect,
    style: &ImageBoxStyle,
) -> Result<()> {
    let area = rect
        .inset(style.padding)
        .inspect_err(|e| log::info!("{e}"))?;

    let image = transform_image(source, area.size(), style);

    draw_rect(canvas, rect, style.outline);
    log::info!("paint image array at coord: {},{} ...", area.x, area.y);
    canvas.paste_gray(&image, area.origin());
    Ok(())
}
