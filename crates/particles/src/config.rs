use festa_types::Color;
use std::ops::RangeInclusive;

/// Colors new confetti is drawn from.
pub const CONFETTI_PALETTE: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::MAGENTA,
    Color::CYAN,
    Color::ORANGE,
];

/// Physics and population parameters of a particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub width: u32,
    pub height: u32,
    /// Constant fall per tick.
    pub gravity_base: f64,
    /// Additional fall per tick per unit of particle size.
    pub gravity_scale: f64,
    pub sway_frequency: f64,
    pub sway_amplitude: f64,
    pub angle_step: f64,
    /// Particles are kept while `y < height + margin`.
    pub margin: f64,
    /// Replenish when the live count drops below this.
    pub floor: usize,
    pub batch_size: usize,
    pub initial_count: usize,
    /// Vertical band replenished particles start in, above the canvas.
    pub spawn_band: RangeInclusive<i32>,
    pub size_range: RangeInclusive<u32>,
    pub palette: Vec<Color>,
}

impl FieldConfig {
    /// A field with default physics on a `width` x `height` canvas.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
            gravity_base: 5.0,
            gravity_scale: 0.2,
            sway_frequency: 0.05,
            sway_amplitude: 2.0,
            angle_step: 0.1,
            margin: 20.0,
            floor: 100,
            batch_size: 5,
            initial_count: 100,
            spawn_band: -50..=-10,
            size_range: 5..=12,
            palette: CONFETTI_PALETTE.to_vec(),
        }
    }
}
