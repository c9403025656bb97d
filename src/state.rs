use crate::constants::EYE_SPREAD;
use crate::random::RandomSource;

const POSITION_STEPS: u32 = 1024;

/// A single eye in normalized screen space.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct EyeState {
    pub x: f32,        // 0.0 (left) to 1.0 (right)
    pub y: f32,        // 0.0 (top) to 1.0 (bottom)
    pub openness: f32, // 0.0 to 1.0
}

impl EyeState {
    pub const fn new(x: f32, y: f32, openness: f32) -> Self {
        Self { x, y, openness }
    }

    fn blend(&mut self, target: &EyeState, alpha: f32) {
        self.x = (1.0 - alpha) * self.x + alpha * target.x;
        self.y = (1.0 - alpha) * self.y + alpha * target.y;
        self.openness = (1.0 - alpha) * self.openness + alpha * target.openness;
    }
}

/// Both eyes of the face, left first.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FaceState {
    pub eyes: [EyeState; 2],
}

impl FaceState {
    /// Eyes centered and wide open.
    pub const INITIAL: FaceState = FaceState {
        eyes: [
            EyeState::new(0.5 - EYE_SPREAD / 2.0, 0.5, 1.0),
            EyeState::new(0.5 + EYE_SPREAD / 2.0, 0.5, 1.0),
        ],
    };

    pub fn left(&self) -> &EyeState {
        &self.eyes[0]
    }

    pub fn right(&self) -> &EyeState {
        &self.eyes[1]
    }

    pub fn left_mut(&mut self) -> &mut EyeState {
        &mut self.eyes[0]
    }

    pub fn right_mut(&mut self) -> &mut EyeState {
        &mut self.eyes[1]
    }

    /// Moves every field toward `target` with weight `1 / (1 + remain)`.
    ///
    /// With `remain == 0` the state lands exactly on `target`.
    pub fn interpolate(&mut self, target: &FaceState, remain: u32) {
        let alpha = 1.0 / (1.0 + remain as f32);
        for (eye, target_eye) in self.eyes.iter_mut().zip(target.eyes.iter()) {
            eye.blend(target_eye, alpha);
        }
    }

    /// Draws the pose that follows this one.
    ///
    /// Position is fresh on every call. Openness has hysteresis: closed eyes
    /// open with a 1/11 chance, open eyes close with a 1/4 chance, otherwise
    /// the current openness is kept.
    pub fn next_random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> FaceState {
        let base_x = normalized_draw(rng) * (1.0 - EYE_SPREAD);
        let y = normalized_draw(rng);

        let mut openness = self.left().openness;
        if openness < 0.5 {
            if rng.value_in(0..=10) == 0 {
                openness = 1.0;
            }
        } else if rng.value_in(0..=3) == 0 {
            openness = 0.0;
        }

        FaceState {
            eyes: [
                EyeState::new(base_x, y, openness),
                EyeState::new(base_x + EYE_SPREAD, y, openness),
            ],
        }
    }
}

impl Default for FaceState {
    fn default() -> Self {
        Self::INITIAL
    }
}

fn normalized_draw<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    rng.value_in(0..=POSITION_STEPS) as f32 / POSITION_STEPS as f32
}
