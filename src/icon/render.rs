use image::{Rgba, RgbaImage};
use log::{debug, warn};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

use super::geometry::IconGeometry;
use crate::error::IconError;
use crate::font::builtin::BuiltinFont;
use crate::font::{Font, FontChain, TextBounds};

// Aproximación de un cuarto de círculo con una cúbica.
const KAPPA: f32 = 0.552_284_8;

/// Posición final de la etiqueta dentro del icono.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Origen de dibujo (esquina superior izquierda de la línea).
    pub origin: (f32, f32),
    /// Caja de tinta relativa a `origin`.
    pub bounds: TextBounds,
    pub font_name: String,
    pub builtin: bool,
}

pub struct RenderedIcon {
    pub image: RgbaImage,
    pub geometry: IconGeometry,
    pub label: LabelPlacement,
}

fn paint_for(color: Rgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint
}

/// Path del rectángulo redondeado descrito por `geometry`.
pub fn rounded_rect_path(geometry: &IconGeometry) -> Option<Path> {
    let l = geometry.left as f32;
    let t = geometry.top as f32;
    let r = geometry.right as f32;
    let b = geometry.bottom as f32;
    let rad = geometry.corner_radius();

    let k = rad * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(l + rad, t);
    pb.line_to(r - rad, t);
    pb.cubic_to(r - rad + k, t, r, t + rad - k, r, t + rad);
    pb.line_to(r, b - rad);
    pb.cubic_to(r, b - rad + k, r - rad + k, b, r - rad, b);
    pb.line_to(l + rad, b);
    pb.cubic_to(l + rad - k, b, l, b - rad + k, l, b - rad);
    pb.line_to(l, t + rad);
    pb.cubic_to(l, t + rad - k, l + rad - k, t, l + rad, t);
    pb.close();
    pb.finish()
}

/// Mide la etiqueta; si la fuente elegida falla, cambia a la integrada y vuelve a medir.
fn measure_label(font: Font, label: &str, size_px: f32) -> (Font, TextBounds) {
    match font.measure(label) {
        Ok(bounds) => (font, bounds),
        Err(e) => {
            warn!("No se pudo medir {:?} con {}: {}. Usando la fuente integrada", label, font.name(), e);
            let font = Font::builtin(size_px);
            let bounds = font.measure(label).unwrap_or_default();
            (font, bounds)
        }
    }
}

/// Dibuja la etiqueta; si la fuente falla al dibujar, repite con la integrada.
/// Devuelve la fuente que realmente se usó.
fn draw_label(font: Font, pixmap: &mut Pixmap, label: &str, origin: (f32, f32), paint: &Paint, size_px: f32) -> Font {
    match font.draw(pixmap, label, origin, paint) {
        Ok(()) => font,
        Err(e) => {
            warn!("No se pudo dibujar {:?} con {}: {}", label, font.name(), e);
            let fallback = BuiltinFont::new(size_px);
            fallback.draw(pixmap, label, origin, paint);
            Font::Builtin(fallback)
        }
    }
}

/// Origen que centra la tinta en un lienzo de `size`, compensando los desplazamientos de la caja.
fn centered_origin(size: u32, bounds: &TextBounds) -> (f32, f32) {
    let size = size as f32;
    let x = ((size - bounds.width()) / 2.0 - bounds.left).round();
    let y = ((size - bounds.height()) / 2.0 - bounds.top).round();
    (x, y)
}

/// Renderiza un icono completo en memoria.
pub fn render_icon(
    size: u32,
    background: Rgba<u8>,
    text_color: Rgba<u8>,
    label: &str,
    fonts: &FontChain,
) -> Result<RenderedIcon, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    // 1. Lienzo transparente
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::Canvas(size))?;

    // 2. Fondo
    let geometry = IconGeometry::compute(size);
    debug!("Geometría {}px: {:?}", size, geometry);
    if let Some(path) = rounded_rect_path(&geometry) {
        pixmap.fill_path(&path, &paint_for(background), FillRule::Winding, Transform::identity(), None);
    }

    // 3. Fuente y medida
    let font_size = geometry.font_size();
    let font = fonts.select(font_size, label);
    let (font, bounds) = measure_label(font, label, font_size);

    // 4. Texto centrado
    let origin = centered_origin(size, &bounds);
    let text_paint = paint_for(text_color);
    let font = draw_label(font, &mut pixmap, label, origin, &text_paint, font_size);

    let label = LabelPlacement {
        origin,
        bounds,
        font_name: font.name(),
        builtin: font.is_builtin(),
    };

    Ok(RenderedIcon {
        image: to_rgba_image(&pixmap)?,
        geometry,
        label,
    })
}

/// tiny-skia trabaja en RGBA premultiplicado; `image` espera RGBA normal.
fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage, IconError> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(IconError::Canvas(pixmap.width()))
}
