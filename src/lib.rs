pub mod game;
pub mod player;
pub mod render;
pub mod error;
pub mod config;
pub mod logging;

pub use error::{GameError, PlayerError, Result};
pub use config::{Config, SystemLimits};
