use std::fs;
use std::path::Path;
use anyhow::{Context, Result, bail};
use raylib::prelude::*;

// --- Load the mouth sprite into a GPU texture ---
pub fn load_sprite(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    sprite_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(sprite_path)
        .with_context(|| format!("Failed to read file {:?}", sprite_path))?;

    // raylib picks the decoder from the extension hint
    let extension = sprite_path.extension().and_then(|s| s.to_str()).unwrap_or("png").to_lowercase();
    let image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to decode image {:?}: {}", sprite_path, e))?;

    if image.width() <= 0 || image.height() <= 0 {
        bail!("Image {:?} is empty", sprite_path);
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {:?}: {}", sprite_path, e))?;

    // CPU copy is no longer needed
    drop(image);

    Ok(texture)
}

/// Loads the sprite, or logs why it could not and carries on without it.
pub fn load_optional_sprite(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    sprite_path: Option<&Path>,
) -> Option<Texture2D> {
    let path = sprite_path?;
    match load_sprite(rl, thread, path) {
        Ok(texture) => {
            log::info!("Loaded mouth sprite {:?} ({}x{})", path, texture.width(), texture.height());
            Some(texture)
        }
        Err(e) => {
            log::warn!("Drawing without a mouth: {:#}", e);
            None
        }
    }
}
