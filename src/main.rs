use anyhow::Result;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod animation;
mod config;
mod constants;
mod face;
mod layout;
mod random;
mod state;
mod texture_loader;

use crate::animation::FaceAnimation;
use crate::config::Config;
use crate::constants::*;
use crate::face::draw_face;
use crate::layout::FaceLayout;
use crate::texture_loader::load_optional_sprite;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    info!(
        "Starting with {:?} cadence at {} fps, mouth: {:?}",
        config.cadence,
        config.target_fps(),
        config.mouth
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title(WINDOW_TITLE)
        .resizable()
        .build();
    rl.set_target_fps(config.target_fps());
    rl.set_trace_log(TraceLogLevel::LOG_WARNING);

    // --- Load the optional mouth, released when main returns ---
    let mouth = load_optional_sprite(&mut rl, &thread, config.mouth.as_deref());
    let mouth_size = mouth.as_ref().map(|t| Vector2::new(t.width() as f32, t.height() as f32));

    let mut animation = FaceAnimation::new(config.cadence, &mut rng);

    // --- Main Loop ---
    while !rl.window_should_close() {
        animation.update(&mut rng);

        let layout = FaceLayout::compute(
            rl.get_render_width() as f32,
            rl.get_render_height() as f32,
            animation.current(),
            mouth_size,
        );

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_face(&mut d, &layout, mouth.as_ref());
    }

    info!("Window closed after {} frames", animation.frame());
    Ok(())
}
