pub mod config;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod math;
pub mod polynomial;

pub use config::{GraphicsOptions, Options, DEFAULT_EPSILON};
pub use error::{PlanarError, Result};
