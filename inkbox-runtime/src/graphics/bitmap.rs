use std::path::Path;

use image::{imageops, imageops::FilterType, GrayImage, Luma};

use crate::error::Result;
use crate::layout::Pixel;

/// Bicubic, like the resampling most imaging libraries default to
pub const RESAMPLE: FilterType = FilterType::CatmullRom;

/// Fill for samples a rotation uncovers
const UNCOVERED: Luma<u8> = Luma([0]);

/// Opens an image file as an 8-bit grayscale source of exactly `width` × `height`
pub fn load_image_source(path: impl AsRef<Path>, width: Pixel, height: Pixel) -> Result<GrayImage> {
    let path = path.as_ref();
    log::info!("loading image {}", path.display());

    let gray = image::open(path)
        .inspect_err(|e| log::info!("{e}"))?
        .to_luma8();

    if gray.dimensions() == (width, height) {
        Ok(gray)
    } else {
        Ok(imageops::resize(&gray, width, height, RESAMPLE))
    }
}

/// Nudges `sin`/`cos` results onto exact values, so quarter turns sample cleanly
fn snap(value: f64) -> f64 {
    (value * 1e15).round() / 1e15
}

/// Rotates counter-clockwise by `degrees` about the image centre.
///
/// The output keeps the source dimensions, so corners may be cut off;
/// whatever the rotated source no longer covers is black.
/// Sampling is nearest-neighbour.
pub fn rotate(source: &GrayImage, degrees: f32) -> GrayImage {
    let (width, height) = source.dimensions();
    let theta = -(degrees as f64).to_radians();
    let (sin, cos) = (snap(theta.sin()), snap(theta.cos()));
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);

    GrayImage::from_fn(width, height, |x, y| {
        let dx = x as f64 + 0.5 - cx;
        let dy = y as f64 + 0.5 - cy;
        let sx = (cos * dx + sin * dy + cx).floor();
        let sy = (-sin * dx + cos * dy + cy).floor();

        if sx < 0.0 || sy < 0.0 || sx >= width as f64 || sy >= height as f64 {
            UNCOVERED
        } else {
            *source.get_pixel(sx as u32, sy as u32)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(width: u32, height: u32) -> GrayImage {
        let mut image = GrayImage::from_pixel(width, height, Luma([255]));
        image.put_pixel(0, 0, Luma([0]));
        image
    }

    fn black_pixels(image: &GrayImage) -> Vec<(u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] == 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn zero_rotation_is_identity() {
        let source = marked(5, 3);
        assert_eq!(rotate(&source, 0.0), source);
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let rotated = rotate(&marked(3, 3), 90.0);
        assert_eq!(black_pixels(&rotated), vec![(0, 2)]);
    }

    #[test]
    fn negative_quarter_turn_is_clockwise() {
        let rotated = rotate(&marked(3, 3), -90.0);
        assert_eq!(black_pixels(&rotated), vec![(2, 0)]);
    }

    #[test]
    fn half_turn_moves_corner_to_corner() {
        let rotated = rotate(&marked(4, 2), 180.0);
        assert_eq!(black_pixels(&rotated), vec![(3, 1)]);
    }

    #[test]
    fn rotation_keeps_dimensions_and_fills_black() {
        let source = GrayImage::from_pixel(10, 6, Luma([255]));
        let rotated = rotate(&source, 45.0);
        assert_eq!(rotated.dimensions(), (10, 6));
        assert_eq!(rotated.get_pixel(0, 0).0[0], 0);
        assert_eq!(rotated.get_pixel(5, 3).0[0], 255);
    }

    #[test]
    fn loads_and_resizes_grayscale() {
        let dir = std::env::temp_dir().join(format!("inkbox-bitmap-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("source.png");
        GrayImage::from_pixel(40, 20, Luma([200])).save(&path).unwrap();

        let same = load_image_source(&path, 40, 20).unwrap();
        assert_eq!(same.dimensions(), (40, 20));
        assert_eq!(same.get_pixel(10, 10).0[0], 200);

        let resized = load_image_source(&path, 16, 16).unwrap();
        assert_eq!(resized.dimensions(), (16, 16));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_image_source("does/not/exist.png", 4, 4).is_err());
    }
}
