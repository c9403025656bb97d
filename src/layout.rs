use raylib::prelude::*;
use crate::constants::*;
use crate::state::{EyeState, FaceState};

/// Screen-space ellipse for one eye.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct EyeShape {
    pub center: Vector2,
    pub radius: Vector2,
    /// Black ellipse drawn over the eye, absent when the eye is shut.
    pub pupil: Option<Vector2>,
}

/// Everything needed to draw one frame of the face.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FaceLayout {
    pub eye_size: Vector2,
    pub eyes: [EyeShape; 2],
    pub mouth: Option<Rectangle>,
}

impl FaceLayout {
    /// Maps a normalized face onto a `width` x `height` render target.
    ///
    /// `mouth_size` is the pixel size of the mouth sprite, if one is loaded.
    pub fn compute(width: f32, height: f32, face: &FaceState, mouth_size: Option<Vector2>) -> FaceLayout {
        // Bottom of the screen is kept for the mouth
        let available_h = FACE_HEIGHT_RATIO * height;
        let available_w = width;

        let eye_h = available_h / GOLDEN_RATIO;
        let eye_w = 0.5 * eye_h;
        let eye_size = Vector2::new(eye_w, eye_h);
        let available = Vector2::new(available_w, available_h);

        let eyes = [
            eye_shape(face.left(), eye_size, available),
            eye_shape(face.right(), eye_size, available),
        ];

        let mouth = mouth_size.map(|sprite| {
            let band_h = height - available_h;
            let mouth_h = band_h / GOLDEN_RATIO;
            let mouth_w = mouth_h * sprite.x / sprite.y;
            let center_x = 0.5 * (eyes[0].center.x + eyes[1].center.x);
            let center_y = available_h + 0.5 * band_h;
            Rectangle::new(center_x - 0.5 * mouth_w, center_y - 0.5 * mouth_h, mouth_w, mouth_h)
        });

        FaceLayout { eye_size, eyes, mouth }
    }

    pub fn left(&self) -> &EyeShape {
        &self.eyes[0]
    }

    pub fn right(&self) -> &EyeShape {
        &self.eyes[1]
    }
}

fn eye_shape(eye: &EyeState, eye_size: Vector2, available: Vector2) -> EyeShape {
    let center = Vector2::new(
        0.5 * eye_size.x + (available.x - eye_size.x) * eye.x,
        0.5 * eye_size.y + (available.y - eye_size.y) * eye.y,
    );
    let radius = Vector2::new(0.5 * eye_size.x, 0.5 * eye_size.y);

    // More openness leaves a thinner rim, down to MIN_THICKNESS
    let pupil = (eye.openness > 0.0).then(|| {
        let thick = 0.5 * eye_size.x * (MIN_THICKNESS + (1.0 - eye.openness) * (1.0 - MIN_THICKNESS));
        Vector2::new(radius.x - thick, radius.y - thick)
    });

    EyeShape { center, radius, pupil }
}
