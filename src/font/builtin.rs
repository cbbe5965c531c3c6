use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

use super::TextBounds;

// Mapa de bits 5x7: cada fila usa los 5 bits bajos, el bit 4 es la columna izquierda.
const GLYPH_W: usize = 5;
const GLYPH_H: usize = 7;
const ADVANCE: usize = 6;

const UNKNOWN: [u8; GLYPH_H] = [0x1f, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1f];
const SPACE: [u8; GLYPH_H] = [0; GLYPH_H];

const LETTERS: [[u8; GLYPH_H]; 26] = [
    [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // A
    [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e], // B
    [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e], // C
    [0x1e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1e], // D
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f], // E
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10], // F
    [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f], // G
    [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // H
    [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f], // L
    [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // O
    [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10], // P
    [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d], // Q
    [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11], // R
    [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e], // S
    [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a], // W
    [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11], // X
    [0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f], // Z
];

const DIGITS: [[u8; GLYPH_H]; 10] = [
    [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e], // 0
    [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e], // 1
    [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f], // 2
    [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e], // 3
    [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02], // 4
    [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e], // 5
    [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e], // 6
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e], // 8
    [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c], // 9
];

fn glyph(c: char) -> &'static [u8; GLYPH_H] {
    let c = c.to_ascii_uppercase();
    match c {
        'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        ' ' => &SPACE,
        _ => &UNKNOWN,
    }
}

fn is_set(rows: &[u8; GLYPH_H], row: usize, col: usize) -> bool {
    rows[row] & (1 << (GLYPH_W - 1 - col)) != 0
}

/// Fuente de mapa de bits incluida en el binario. No depende del sistema y no puede fallar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinFont {
    cell: f32,
}

impl BuiltinFont {
    pub fn new(size_px: f32) -> Self {
        // Las mayúsculas ocupan 7 celdas: ~0.7 em, como una sans-serif normal.
        let cell = (size_px / 10.0).max(0.1);
        Self { cell }
    }

    /// Celdas encendidas del texto como (columna, fila) en unidades de celda.
    fn cells(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
        text.chars().enumerate().flat_map(|(i, c)| {
            let rows = glyph(c);
            (0..GLYPH_H).flat_map(move |row| {
                (0..GLYPH_W)
                    .filter(move |&col| is_set(rows, row, col))
                    .map(move |col| (i * ADVANCE + col, row))
            })
        })
    }

    pub fn measure(&self, text: &str) -> TextBounds {
        let mut bounds: Option<TextBounds> = None;
        for (col, row) in Self::cells(text) {
            let cell = TextBounds {
                left: col as f32 * self.cell,
                top: row as f32 * self.cell,
                right: (col + 1) as f32 * self.cell,
                bottom: (row + 1) as f32 * self.cell,
            };
            bounds = Some(match bounds {
                Some(b) => b.union(cell),
                None => cell,
            });
        }
        bounds.unwrap_or_default()
    }

    pub fn draw(&self, pixmap: &mut Pixmap, text: &str, origin: (f32, f32), paint: &Paint) {
        // Un único path con todas las celdas: así las celdas contiguas no dejan costuras.
        let mut pb = PathBuilder::new();
        for (col, row) in Self::cells(text) {
            let x = origin.0 + col as f32 * self.cell;
            let y = origin.1 + row as f32 * self.cell;
            if let Some(rect) = Rect::from_xywh(x, y, self.cell, self.cell) {
                pb.push_rect(rect);
            }
        }

        if let Some(path) = pb.finish() {
            pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_box_matches_cell_grid() {
        let font = BuiltinFont::new(10.0);
        let b = font.measure("TGM");
        // Tres glifos de 5 columnas separados por una columna vacía.
        assert_eq!(b.left, 0.0);
        assert_eq!(b.top, 0.0);
        assert!((b.right - 17.0).abs() < 1e-4);
        assert!((b.bottom - 7.0).abs() < 1e-4);
    }

    #[test]
    fn lowercase_uses_uppercase_glyphs() {
        let font = BuiltinFont::new(12.0);
        assert_eq!(font.measure("tgm"), font.measure("TGM"));
    }

    #[test]
    fn blank_text_has_no_ink() {
        let font = BuiltinFont::new(8.0);
        assert!(font.measure("").is_empty());
        assert!(font.measure("  ").is_empty());
    }

    #[test]
    fn unknown_characters_still_have_ink() {
        let font = BuiltinFont::new(8.0);
        assert!(!font.measure("€").is_empty());
    }

    #[test]
    fn draw_paints_inside_measured_box() {
        let font = BuiltinFont::new(20.0);
        let mut pixmap = Pixmap::new(48, 24).unwrap();
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        font.draw(&mut pixmap, "TGM", (2.0, 3.0), &paint);

        let b = font.measure("TGM");
        for y in 0..24u32 {
            for x in 0..48u32 {
                let alpha = pixmap.pixel(x, y).unwrap().alpha();
                let inside = x as f32 >= 2.0 + b.left
                    && (x as f32) < 2.0 + b.right
                    && y as f32 >= 3.0 + b.top
                    && (y as f32) < 3.0 + b.bottom;
                if !inside {
                    assert_eq!(alpha, 0, "tinta fuera de la caja en ({}, {})", x, y);
                }
            }
        }
        // Esquina superior izquierda de la T.
        assert_eq!(pixmap.pixel(2, 3).unwrap().alpha(), 255);
    }
}
