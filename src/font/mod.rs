pub mod builtin;
pub mod truetype;

use std::path::{Path, PathBuf};

use log::debug;
use tiny_skia::{Paint, Pixmap};

use crate::error::FontError;
use builtin::BuiltinFont;
use truetype::TrueTypeFont;

/// Caja de tinta de un texto, en píxeles, relativa al origen de dibujo.
/// El origen es la esquina superior izquierda de la línea (altura del ascendente).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    /// Ancho de la tinta; nunca menor que 1 para no romper el centrado.
    pub fn width(&self) -> f32 {
        let w = self.right - self.left;
        if w > 0.0 { w } else { 1.0 }
    }

    pub fn height(&self) -> f32 {
        let h = self.bottom - self.top;
        if h > 0.0 { h } else { 1.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub(crate) fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Fuente ya cargada a un tamaño concreto.
pub enum Font {
    TrueType(TrueTypeFont),
    Builtin(BuiltinFont),
}

impl Font {
    pub fn builtin(size_px: f32) -> Self {
        Font::Builtin(BuiltinFont::new(size_px))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }

    pub fn name(&self) -> String {
        match self {
            Font::TrueType(f) => f.path().display().to_string(),
            Font::Builtin(_) => "builtin".to_string(),
        }
    }

    pub fn measure(&self, text: &str) -> Result<TextBounds, FontError> {
        match self {
            Font::TrueType(f) => f.measure(text),
            Font::Builtin(f) => Ok(f.measure(text)),
        }
    }

    /// Dibuja `text` con el origen (esquina superior izquierda de la línea) en `origin`.
    pub fn draw(&self, pixmap: &mut Pixmap, text: &str, origin: (f32, f32), paint: &Paint) -> Result<(), FontError> {
        match self {
            Font::TrueType(f) => f.draw(pixmap, text, origin, paint),
            Font::Builtin(f) => {
                f.draw(pixmap, text, origin, paint);
                Ok(())
            }
        }
    }
}

/// Una forma de obtener una fuente. La cadena las prueba en orden.
pub trait FontStrategy {
    fn describe(&self) -> String;
    fn load(&self, size_px: f32) -> Result<Font, FontError>;
}

/// Fuente TrueType (o la primera cara de un .ttc) en una ruta fija.
pub struct FileFontStrategy {
    path: PathBuf,
}

impl FileFontStrategy {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl FontStrategy for FileFontStrategy {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self, size_px: f32) -> Result<Font, FontError> {
        TrueTypeFont::load(&self.path, size_px).map(Font::TrueType)
    }
}

/// Cadena de estrategias que termina siempre en la fuente integrada.
pub struct FontChain {
    strategies: Vec<Box<dyn FontStrategy>>,
}

impl FontChain {
    pub fn new(strategies: Vec<Box<dyn FontStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn from_candidates(paths: &[PathBuf]) -> Self {
        let strategies = paths
            .iter()
            .map(|p| Box::new(FileFontStrategy::new(p)) as Box<dyn FontStrategy>)
            .collect();
        Self::new(strategies)
    }

    /// Primera fuente que carga y produce una caja no vacía para `label`.
    /// Si ninguna sirve, la integrada.
    pub fn select(&self, size_px: f32, label: &str) -> Font {
        for strategy in &self.strategies {
            let font = match strategy.load(size_px) {
                Ok(font) => font,
                Err(e) => {
                    debug!("Fuente descartada {}: {}", strategy.describe(), e);
                    continue;
                }
            };

            match font.measure(label) {
                Ok(bounds) if !bounds.is_empty() => {
                    debug!("Fuente seleccionada: {} ({}px)", strategy.describe(), size_px);
                    return font;
                }
                Ok(_) => debug!("Fuente descartada {}: caja vacía", strategy.describe()),
                Err(e) => debug!("Fuente descartada {}: {}", strategy.describe(), e),
            }
        }

        debug!("Ninguna fuente candidata disponible, usando la integrada ({}px)", size_px);
        Font::builtin(size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl FontStrategy for Broken {
        fn describe(&self) -> String {
            "rota".into()
        }

        fn load(&self, _size_px: f32) -> Result<Font, FontError> {
            Err(FontError::InvalidFace(PathBuf::from("rota")))
        }
    }

    struct AlwaysBuiltin;

    impl FontStrategy for AlwaysBuiltin {
        fn describe(&self) -> String {
            "integrada".into()
        }

        fn load(&self, size_px: f32) -> Result<Font, FontError> {
            Ok(Font::builtin(size_px * 2.0))
        }
    }

    #[test]
    fn bounds_report_at_least_one_pixel() {
        let b = TextBounds::default();
        assert!(b.is_empty());
        assert_eq!(b.width(), 1.0);
        assert_eq!(b.height(), 1.0);
    }

    #[test]
    fn missing_files_fall_back_to_builtin() {
        let chain = FontChain::from_candidates(&[
            PathBuf::from("/no/existe/Helvetica.ttc"),
            PathBuf::from("/no/existe/DejaVuSans-Bold.ttf"),
        ]);
        let font = chain.select(8.0, "TGM");
        assert!(font.is_builtin());
        assert!(!font.measure("TGM").unwrap().is_empty());
    }

    #[test]
    fn first_working_strategy_wins() {
        let chain = FontChain::new(vec![Box::new(Broken), Box::new(AlwaysBuiltin)]);
        let font = chain.select(10.0, "TGM");
        // La estrategia de prueba duplica el tamaño: distingue su fuente de la de reserva.
        let doubled = Font::builtin(20.0).measure("TGM").unwrap();
        assert_eq!(font.measure("TGM").unwrap(), doubled);
    }

    #[test]
    fn label_without_ink_skips_candidate() {
        let chain = FontChain::new(vec![Box::new(AlwaysBuiltin)]);
        let font = chain.select(10.0, "   ");
        assert!(font.is_builtin());
        // Es la de reserva a 10px, no la de la estrategia (que duplica el tamaño).
        assert_eq!(font.measure("TGM").unwrap(), Font::builtin(10.0).measure("TGM").unwrap());
    }
}
