// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod room;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{RoomStore, StoreClient};
pub use config::{load_config, save_config, Config, StoreCredentials};
pub use engine::{
    calculate_wheel_rotation, draw, pick_random, pool_for_today, slugify, DrawResult, RandomSource,
    RepeatPolicy, WheelSettings,
};
pub use error::{WheelError, WheelResult};
pub use models::*;
pub use room::{Room, RoomService};
