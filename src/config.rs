use std::path::PathBuf;
use clap::Parser;
use crate::animation::Cadence;
use crate::constants::*;

/// Animated cartoon face whose eyes wander and blink on their own.
#[derive(Debug, Parser)]
#[command(name = "joaf", version)]
pub struct Config {
    /// Movement pacing preset
    #[arg(long, value_enum, default_value_t = Cadence::Lively)]
    pub cadence: Cadence,

    /// Target frame rate, defaults to the cadence's own rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Draw a mouth sprite loaded from PATH
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_MOUTH_PATH)]
    pub mouth: Option<PathBuf>,

    /// Seed for a reproducible animation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,
}

impl Config {
    pub fn target_fps(&self) -> u32 {
        self.fps.unwrap_or_else(|| self.cadence.fps())
    }
}
