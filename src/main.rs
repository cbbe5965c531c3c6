use anyhow::Context;
use tgm_icons::{IconConfig, IconGenerator};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Constantes fijas: directorio `icons/`, tamaños 16/48/128, etiqueta "TGM"
    let config = IconConfig::default();
    let output_dir = config.output_dir.clone();

    IconGenerator::new(config)
        .run()
        .with_context(|| format!("Fallo al generar los iconos en {:?}", output_dir))?;

    Ok(())
}
