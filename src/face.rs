use raylib::prelude::*;
use crate::constants::EYE_COLOR;
use crate::layout::FaceLayout;

/// Draws the eyes, then the pupils over them, then the mouth sprite if any.
pub fn draw_face(d: &mut RaylibDrawHandle, layout: &FaceLayout, mouth: Option<&Texture2D>) {
    for eye in layout.eyes.iter() {
        d.draw_ellipse(eye.center.x as i32, eye.center.y as i32, eye.radius.x, eye.radius.y, EYE_COLOR);
    }

    for eye in layout.eyes.iter() {
        if let Some(pupil) = eye.pupil {
            d.draw_ellipse(eye.center.x as i32, eye.center.y as i32, pupil.x, pupil.y, Color::BLACK);
        }
    }

    if let (Some(texture), Some(dest)) = (mouth, layout.mouth) {
        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            EYE_COLOR,
        );
    }
}
