use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("tamaño de icono inválido: {0}")]
    InvalidSize(u32),

    #[error("no se pudo reservar un lienzo de {0}x{0}")]
    Canvas(u32),

    #[error("no se pudo crear el directorio {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no se pudo guardar {path:?}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Motivos por los que una fuente candidata no sirve.
/// Nunca llegan al usuario: la cadena de fuentes pasa a la siguiente.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("no se pudo leer {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} no es una fuente válida: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("{0:?} tiene métricas inválidas")]
    InvalidFace(PathBuf),

    #[error("la etiqueta {0:?} no tiene tinta con esta fuente")]
    Empty(String),
}
