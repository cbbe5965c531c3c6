//! Generador de iconos para la extensión Tab Group Manager.
//!
//! Dibuja un rectángulo redondeado con la etiqueta centrada y lo guarda como PNG
//! en varios tamaños.

pub mod config;
pub mod error;
pub mod font;
pub mod icon;

pub use config::IconConfig;
pub use error::{FontError, IconError};
pub use icon::IconGenerator;
