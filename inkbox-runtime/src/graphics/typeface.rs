use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::rc::Rc;

use fontdue::{Font as FontData, FontSettings};

use crate::error::{RenderError, Result};
use crate::layout::Pixel;

/// Simple wrapper for the `&'static str` returned by `fontdue`,
/// so it can be reported like any other error
#[derive(Debug)]
pub struct FontError(&'static str);
impl Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FontError: {}", self.0)
    }
}
impl std::error::Error for FontError {}

/// Rasterized coverage for a single character.
///
/// Offsets are relative to the pen position on the baseline, y growing downwards.
pub struct Glyph {
    pub coverage: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub left: i32,
    pub top: i32,
    pub advance: i32,
}

/// A parsed face at one pixel size
pub struct Typeface {
    size: Pixel,
    data: Rc<FontData>,
}
impl Typeface {
    /// Distance from the top of a line to its baseline
    pub fn ascent(&self) -> i32 {
        self.data
            .horizontal_line_metrics(self.size as f32)
            .map(|metrics| metrics.ascent.round() as i32)
            .unwrap_or(self.size as i32)
    }

    pub fn rasterize(&self, character: char) -> Glyph {
        let (metrics, coverage) = self.data.rasterize(character, self.size as f32);
        Glyph {
            coverage,
            width: metrics.width,
            height: metrics.height,
            left: metrics.xmin,
            top: -(metrics.ymin + metrics.height as i32),
            advance: metrics.advance_width.round() as i32,
        }
    }
}

fn parse(face: &str, bytes: &[u8]) -> Result<FontData> {
    FontData::from_bytes(bytes, FontSettings::default()).map_err(|e| {
        RenderError::FontUnavailable {
            face: face.to_owned(),
            reason: FontError(e).to_string(),
        }
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FontKey {
    face: String,
    size: Pixel,
}

/// Resolves `(face, size)` to a [`Typeface`], reading each face file from the fonts
/// directory once. Pages only ever use a handful of fonts, so nothing is evicted.
pub struct FontCache {
    fonts_dir: PathBuf,
    faces: HashMap<String, Rc<FontData>>,
    typefaces: HashMap<FontKey, Rc<Typeface>>,
}
impl FontCache {
    pub fn new(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
            faces: HashMap::new(),
            typefaces: HashMap::new(),
        }
    }

    pub fn get(&mut self, face: &str, size: Pixel) -> Result<Rc<Typeface>> {
        let key = FontKey {
            face: face.to_owned(),
            size,
        };
        if let Some(typeface) = self.typefaces.get(&key) {
            return Ok(Rc::clone(typeface));
        }

        let data = self.face(face)?;
        let typeface = Rc::new(Typeface { size, data });
        self.typefaces.insert(key, Rc::clone(&typeface));
        Ok(typeface)
    }

    fn face(&mut self, face: &str) -> Result<Rc<FontData>> {
        if let Some(data) = self.faces.get(face) {
            return Ok(Rc::clone(data));
        }

        let path = self.fonts_dir.join(face);
        log::debug!("loading font {}", path.display());
        let bytes = std::fs::read(&path).map_err(|e| {
            log::info!("{}: {e}", path.display());
            RenderError::FontUnavailable {
                face: face.to_owned(),
                reason: e.to_string(),
            }
        })?;

        let data = Rc::new(parse(face, &bytes)?);
        self.faces.insert(face.to_owned(), Rc::clone(&data));
        Ok(data)
    }
}
