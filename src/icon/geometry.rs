/// Geometría del fondo de un icono, en píxeles.
/// `left..right` y `top..bottom` son bordes de píxel: el rectángulo cubre `right - left` columnas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub padding: u32,
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub radius: u32,
}

/// Radio máximo antes de ajustarlo al rectángulo (esquinas tipo grupo de pestañas).
const MAX_RADIUS: u32 = 12;

impl IconGeometry {
    /// Calcula padding, rectángulo y radio para `size` (>= 1).
    /// La geometría degenerada se ajusta en lugar de producir un dibujo inválido.
    pub fn compute(size: u32) -> Self {
        let padding = (size / 16).max(1);
        let initial_radius = (size / 4).clamp(1, MAX_RADIUS);

        let (left, top, right, bottom) = Self::rect(size, padding);

        let width = right - left;
        let height = bottom - top;
        let max_radius = width.min(height) / 2;
        // El rectángulo siempre tiene área: el radio nunca baja de 1.
        let radius = initial_radius.min(max_radius).max(1);

        Self { size, padding, left, top, right, bottom, radius }
    }

    fn rect(size: u32, padding: u32) -> (u32, u32, u32, u32) {
        let size = i64::from(size);
        let padding = i64::from(padding);
        let mut rect = (padding, padding, size - padding, size - padding);

        if rect.2 <= rect.0 || rect.3 <= rect.1 {
            rect = (1, 1, size - 1, size - 1);
        }
        if rect.2 <= rect.0 || rect.3 <= rect.1 {
            // Tamaños 1 y 2: ni siquiera el rectángulo de reserva tiene área.
            rect = (0, 0, size, size);
        }

        (rect.0 as u32, rect.1 as u32, rect.2 as u32, rect.3 as u32)
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Radio que se dibuja: con un lado de 1px la esquina queda en medio píxel.
    pub fn corner_radius(&self) -> f32 {
        (self.radius as f32).min(self.width().min(self.height()) as f32 / 2.0)
    }

    /// `max(8, round(0.35 * size))`.
    pub fn font_size(&self) -> f32 {
        (self.size as f32 * 0.35).round().max(8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_sizes() {
        let g = IconGeometry::compute(16);
        assert_eq!((g.padding, g.left, g.top, g.right, g.bottom), (1, 1, 1, 15, 15));
        assert_eq!(g.radius, 4);
        assert!(g.radius <= g.width().min(g.height()) / 2);
        assert_eq!(g.font_size(), 8.0);

        let g = IconGeometry::compute(48);
        assert_eq!((g.padding, g.radius), (3, 12));
        assert_eq!(g.font_size(), 17.0);

        let g = IconGeometry::compute(128);
        assert_eq!((g.padding, g.left, g.right, g.radius), (8, 8, 120, 12));
        assert_eq!(g.font_size(), 45.0);
    }

    #[test]
    fn rect_and_radius_stay_in_bounds() {
        for size in 1..=300 {
            let g = IconGeometry::compute(size);
            assert!(g.right <= size && g.bottom <= size, "size {}", size);
            assert!(g.right > g.left && g.bottom > g.top, "size {}", size);
            assert!(g.radius >= 1, "size {}", size);
            assert!(g.radius <= (g.width().min(g.height()) / 2).max(1), "size {}", size);
            assert!(g.corner_radius() * 2.0 <= g.width().min(g.height()) as f32, "size {}", size);
        }
    }

    #[test]
    fn tiny_sizes_use_fallback_rects() {
        let g = IconGeometry::compute(1);
        assert_eq!((g.left, g.top, g.right, g.bottom, g.radius), (0, 0, 1, 1, 1));
        assert_eq!(g.corner_radius(), 0.5);

        let g = IconGeometry::compute(2);
        assert_eq!((g.left, g.top, g.right, g.bottom), (0, 0, 2, 2));
        assert_eq!(g.radius, 1);

        let g = IconGeometry::compute(3);
        assert_eq!((g.left, g.right, g.radius), (1, 2, 1));
        assert_eq!(g.corner_radius(), 0.5);

        let g = IconGeometry::compute(4);
        assert_eq!((g.left, g.right, g.radius), (1, 3, 1));
        assert_eq!(g.corner_radius(), 1.0);
    }
}
