pub mod geometry;
pub mod render;

use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use log::info;

use crate::config::IconConfig;
use crate::error::IconError;
use crate::font::FontChain;
use render::RenderedIcon;

/// Genera los iconos de la extensión a partir de una configuración fija.
pub struct IconGenerator {
    config: IconConfig,
    fonts: FontChain,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        let fonts = FontChain::from_candidates(&config.font_candidates);
        Self { config, fonts }
    }

    /// Icono de `size`x`size` con su geometría y la posición de la etiqueta.
    pub fn render(&self, size: u32) -> Result<RenderedIcon, IconError> {
        render::render_icon(
            size,
            self.config.background,
            self.config.text_color,
            &self.config.label,
            &self.fonts,
        )
    }

    pub fn render_icon(&self, size: u32) -> Result<RgbaImage, IconError> {
        self.render(size).map(|icon| icon.image)
    }

    /// Escribe `icon<size>.png` para cada tamaño, en orden.
    /// Se detiene en el primer error de E/S; los iconos ya escritos se quedan en disco.
    pub fn run(&self) -> Result<Vec<PathBuf>, IconError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            let image = self.render_icon(size)?;
            let path = self.config.icon_path(size);
            image.save(&path).map_err(|source| IconError::Save {
                path: path.clone(),
                source,
            })?;

            info!("Icono {}x{} guardado en {:?}", size, size, path);
            println!("Created {}", path.display());
            written.push(path);
        }

        println!("Icons created successfully!");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_icon_has_requested_dimensions() {
        let generator = IconGenerator::new(IconConfig::default());
        for size in [16, 48, 128] {
            let image = generator.render_icon(size).unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn unreadable_candidates_use_builtin_font() {
        let config = IconConfig::default().with_font_candidates(["/no/existe/a.ttf", "/no/existe/b.ttc"]);
        let generator = IconGenerator::new(config);
        let icon = generator.render(48).unwrap();
        assert!(icon.label.builtin);
        assert!(!icon.label.bounds.is_empty());
        assert!(icon.image.pixels().any(|p| p.0 == [255, 255, 255, 255]));
    }
}
