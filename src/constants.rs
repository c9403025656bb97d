use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 800;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 600;           // Initial window height
pub const WINDOW_TITLE: &str = "JOAF";

pub const GOLDEN_RATIO: f32 = 1.618034;
pub const FACE_HEIGHT_RATIO: f32 = 0.8;       // Share of the render height used by the eyes
pub const EYE_SPREAD: f32 = 0.55;             // Normalized horizontal distance between the eyes
pub const MIN_THICKNESS: f32 = 0.25;          // Thinnest rim left around the pupil, in half eye widths

pub const EYE_COLOR: Color = Color::new(255, 255, 222, 255);

pub const DEFAULT_MOUTH_PATH: &str = "resources/mouth.png";
