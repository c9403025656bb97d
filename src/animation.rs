use std::ops::RangeInclusive;
use clap::ValueEnum;
use log::debug;
use crate::random::RandomSource;
use crate::state::FaceState;

/// How often the face picks a new pose and how quickly it gets there.
#[derive(Debug, PartialEq, Clone, Copy, ValueEnum)]
pub enum Cadence {
    /// Short pauses, quick three frame moves.
    Lively,
    /// Long pauses, slower six frame moves, rendered at a higher frame rate.
    Calm,
}

impl Cadence {
    /// Frames before the very first movement.
    pub fn first_movement(self) -> RangeInclusive<u32> {
        match self {
            Cadence::Lively => 10..=30,
            Cadence::Calm => 60..=180,
        }
    }

    /// Frames between later movements.
    pub fn movement(self) -> RangeInclusive<u32> {
        match self {
            Cadence::Lively => 30..=60,
            Cadence::Calm => 60..=180,
        }
    }

    pub fn interpolation_frames(self) -> u32 {
        match self {
            Cadence::Lively => 3,
            Cadence::Calm => 6,
        }
    }

    pub fn fps(self) -> u32 {
        match self {
            Cadence::Lively => 60,
            Cadence::Calm => 120,
        }
    }
}

/// Everything that changes from one frame to the next.
#[derive(Debug, Clone)]
pub struct FaceAnimation {
    cadence: Cadence,
    current: FaceState,
    target: FaceState,
    interpolation_delay: u32,
    movement_delay: u32,
    frame: u64,
}

impl FaceAnimation {
    pub fn new<R: RandomSource + ?Sized>(cadence: Cadence, rng: &mut R) -> Self {
        Self {
            cadence,
            current: FaceState::INITIAL,
            target: FaceState::INITIAL,
            interpolation_delay: 0,
            movement_delay: rng.value_in(cadence.first_movement()),
            frame: 0,
        }
    }

    /// Advances the animation by one frame.
    ///
    /// A freshly drawn target is only blended toward from the following frame
    /// on. Once the interpolation delay is spent, `current` stays pinned to
    /// `target`.
    pub fn update<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if self.interpolation_delay > 0 {
            self.interpolation_delay -= 1;
        }
        self.current.interpolate(&self.target, self.interpolation_delay);

        if self.movement_delay > 0 {
            self.movement_delay -= 1;
        } else {
            self.target = self.target.next_random(rng);
            self.interpolation_delay = self.cadence.interpolation_frames();
            self.movement_delay = rng.value_in(self.cadence.movement());
            debug!(
                "frame {}: new target x={:.3} y={:.3} openness={:.1}, next move in {} frames",
                self.frame,
                self.target.left().x,
                self.target.left().y,
                self.target.left().openness,
                self.movement_delay
            );
        }

        self.frame += 1;
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn current(&self) -> &FaceState {
        &self.current
    }

    pub fn target(&self) -> &FaceState {
        &self.target
    }

    pub fn interpolation_delay(&self) -> u32 {
        self.interpolation_delay
    }

    pub fn movement_delay(&self) -> u32 {
        self.movement_delay
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EYE_SPREAD;
    use crate::random::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cadence_presets() {
        assert_eq!(Cadence::Lively.first_movement(), 10..=30);
        assert_eq!(Cadence::Lively.movement(), 30..=60);
        assert_eq!(Cadence::Lively.interpolation_frames(), 3);
        assert_eq!(Cadence::Lively.fps(), 60);
        assert_eq!(Cadence::Calm.movement(), 60..=180);
        assert_eq!(Cadence::Calm.interpolation_frames(), 6);
        assert_eq!(Cadence::Calm.fps(), 120);
    }

    #[test]
    fn test_new_draws_first_movement() {
        let mut rng = Scripted::new(&[12]);
        let animation = FaceAnimation::new(Cadence::Lively, &mut rng);
        assert_eq!(animation.movement_delay(), 12);
        assert_eq!(animation.interpolation_delay(), 0);
        assert_eq!(animation.current(), &FaceState::INITIAL);
        assert_eq!(animation.target(), &FaceState::INITIAL);
        assert_eq!(animation.frame(), 0);
        assert_eq!(animation.cadence(), Cadence::Lively);
    }

    #[test]
    fn test_target_changes_after_countdown() {
        // first movement, then x, y, blink (keep), next movement
        let mut rng = Scripted::new(&[10, 0, 1024, 1, 45]);
        let mut animation = FaceAnimation::new(Cadence::Lively, &mut rng);

        for _ in 0..10 {
            animation.update(&mut rng);
            assert_eq!(animation.target(), &FaceState::INITIAL);
            assert_eq!(animation.current(), &FaceState::INITIAL);
        }
        assert_eq!(animation.movement_delay(), 0);

        animation.update(&mut rng);
        assert_eq!(animation.target().left().x, 0.0);
        assert_eq!(animation.target().left().y, 1.0);
        assert_eq!(animation.interpolation_delay(), 3);
        assert_eq!(animation.movement_delay(), 45);
        // not blended toward until the next frame
        assert_eq!(animation.current(), &FaceState::INITIAL);
        assert_eq!(animation.frame(), 11);
    }

    #[test]
    fn test_interpolation_reaches_target_when_delay_expires() {
        let mut rng = Scripted::new(&[10, 0, 1024, 1, 45]);
        let mut animation = FaceAnimation::new(Cadence::Lively, &mut rng);
        for _ in 0..11 {
            animation.update(&mut rng);
        }

        let target = *animation.target();
        let mut previous_gap = (animation.current().left().y - target.left().y).abs();
        for expected_delay in [2, 1] {
            animation.update(&mut rng);
            assert_eq!(animation.interpolation_delay(), expected_delay);
            let gap = (animation.current().left().y - target.left().y).abs();
            assert!(gap < previous_gap);
            assert!(gap > 0.0);
            previous_gap = gap;
        }

        animation.update(&mut rng);
        assert_eq!(animation.interpolation_delay(), 0);
        assert_eq!(animation.current(), &target);

        // pinned afterwards
        animation.update(&mut rng);
        assert_eq!(animation.current(), &target);
    }

    #[test]
    fn test_calm_cadence_resets_to_six_frames() {
        let mut rng = Scripted::new(&[60, 512, 512, 1, 100]);
        let mut animation = FaceAnimation::new(Cadence::Calm, &mut rng);
        for _ in 0..61 {
            animation.update(&mut rng);
        }
        assert_eq!(animation.interpolation_delay(), 6);
        assert_eq!(animation.movement_delay(), 100);
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut animation = FaceAnimation::new(Cadence::Lively, &mut rng);
        for _ in 0..10_000 {
            animation.update(&mut rng);
            let current = animation.current();
            assert!((current.right().x - current.left().x - EYE_SPREAD).abs() < 1e-4);
            for eye in current.eyes.iter() {
                for value in [eye.x, eye.y, eye.openness] {
                    assert!(value >= -1e-4 && value <= 1.0 + 1e-4, "{} out of range", value);
                }
            }
            assert!(animation.interpolation_delay() <= 3);
            assert!(animation.movement_delay() <= 60);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut animation = FaceAnimation::new(Cadence::Calm, &mut rng);
            for _ in 0..500 {
                animation.update(&mut rng);
            }
            *animation.current()
        };
        assert_eq!(run(5), run(5));
    }
}
