use std::path::{Path, PathBuf};

use image::Rgba;

/// Azul de los grupos de pestañas de Chrome (#1a73e8).
pub const BACKGROUND: Rgba<u8> = Rgba([0x1a, 0x73, 0xe8, 0xff]);
pub const TEXT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

pub const LABEL: &str = "TGM";
pub const OUTPUT_DIR: &str = "icons";
pub const SIZES: [u32; 3] = [16, 48, 128];

/// Fuentes sans-serif en negrita, en orden de preferencia (macOS primero, luego Linux).
pub const FONT_CANDIDATES: [&str; 4] = [
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Parámetros fijos del generador.
/// Se construye una vez y se entrega a `IconGenerator`; no cambia durante la ejecución.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub background: Rgba<u8>,
    pub text_color: Rgba<u8>,
    pub label: String,
    pub font_candidates: Vec<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: SIZES.to_vec(),
            background: BACKGROUND,
            text_color: TEXT,
            label: LABEL.to_string(),
            font_candidates: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl IconConfig {
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn with_font_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.font_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Ruta de salida `<output_dir>/icon<size>.png`.
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(format!("icon{}.png", size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_extension_assets() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.sizes, vec![16, 48, 128]);
        assert_eq!(cfg.label, "TGM");
        assert_eq!(cfg.background, Rgba([26, 115, 232, 255]));
        assert_eq!(cfg.font_candidates.len(), 4);
        assert_eq!(cfg.icon_path(48), Path::new("icons").join("icon48.png"));
    }

    #[test]
    fn builders_replace_fields() {
        let cfg = IconConfig::default()
            .with_output_dir("/tmp/out")
            .with_sizes([32])
            .with_font_candidates(Vec::<PathBuf>::new());
        assert_eq!(cfg.icon_path(32), PathBuf::from("/tmp/out/icon32.png"));
        assert!(cfg.font_candidates.is_empty());
        assert_eq!(cfg.label, LABEL);
    }
}
