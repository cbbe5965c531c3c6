use std::fs;
use std::path::{Path, PathBuf};

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use super::TextBounds;
use crate::error::FontError;

/// Fuente TrueType leída de disco y escalada a `size_px` píxeles por em.
/// Guarda los bytes y vuelve a interpretar la cara en cada uso (`Face` toma prestados los datos).
pub struct TrueTypeFont {
    path: PathBuf,
    data: Vec<u8>,
    size_px: f32,
}

/// Glifo posicionado sobre la línea: desplazamiento horizontal del lápiz en píxeles.
struct Placed {
    id: GlyphId,
    pen_x: f32,
}

impl TrueTypeFont {
    pub fn load(path: &Path, size_px: f32) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let font = Self {
            path: path.to_path_buf(),
            data,
            size_px,
        };
        // Validamos la cara al cargar para que un archivo corrupto cuente como "no disponible".
        font.face()?;
        Ok(font)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fuente sin validar, para ejercitar los caminos de error.
    #[cfg(test)]
    pub(crate) fn from_bytes(path: impl AsRef<Path>, data: Vec<u8>, size_px: f32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data,
            size_px,
        }
    }

    // En un .ttc usamos la primera cara de la colección.
    fn face(&self) -> Result<Face<'_>, FontError> {
        let face = Face::parse(&self.data, 0).map_err(|e| FontError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        if face.units_per_em() == 0 {
            return Err(FontError::InvalidFace(self.path.clone()));
        }
        Ok(face)
    }

    fn scale(&self, face: &Face<'_>) -> f32 {
        self.size_px / face.units_per_em() as f32
    }

    fn layout(&self, face: &Face<'_>, text: &str) -> Vec<Placed> {
        let scale = self.scale(face);
        let mut pen_x = 0.0;
        let mut placed = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = face.glyph_index(c).unwrap_or(GlyphId(0));
            placed.push(Placed { id, pen_x });
            pen_x += face.glyph_hor_advance(id).unwrap_or(0) as f32 * scale;
        }
        placed
    }

    pub fn measure(&self, text: &str) -> Result<TextBounds, FontError> {
        let face = self.face()?;
        let scale = self.scale(&face);
        let ascent = face.ascender() as f32 * scale;

        let mut bounds: Option<TextBounds> = None;
        for glyph in self.layout(&face, text) {
            let Some(bbox) = face.glyph_bounding_box(glyph.id) else {
                continue;
            };
            // Unidades de fuente (y hacia arriba) a píxeles (y hacia abajo).
            let glyph_bounds = TextBounds {
                left: glyph.pen_x + bbox.x_min as f32 * scale,
                top: ascent - bbox.y_max as f32 * scale,
                right: glyph.pen_x + bbox.x_max as f32 * scale,
                bottom: ascent - bbox.y_min as f32 * scale,
            };
            bounds = Some(match bounds {
                Some(b) => b.union(glyph_bounds),
                None => glyph_bounds,
            });
        }

        bounds.ok_or_else(|| FontError::Empty(text.to_string()))
    }

    pub fn draw(&self, pixmap: &mut Pixmap, text: &str, origin: (f32, f32), paint: &Paint) -> Result<(), FontError> {
        let face = self.face()?;
        let scale = self.scale(&face);
        let baseline = origin.1 + face.ascender() as f32 * scale;

        for glyph in self.layout(&face, text) {
            let mut outline = GlyphOutline(PathBuilder::new());
            if face.outline_glyph(glyph.id, &mut outline).is_none() {
                continue;
            }
            let Some(path) = outline.0.finish() else {
                continue;
            };
            let transform = Transform::from_row(scale, 0.0, 0.0, -scale, origin.0 + glyph.pen_x, baseline);
            pixmap.fill_path(&path, paint, FillRule::Winding, transform, None);
        }
        Ok(())
    }
}

/// Adaptador de contornos de `ttf-parser` a un path de `tiny-skia`, en unidades de fuente.
struct GlyphOutline(PathBuilder);

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
