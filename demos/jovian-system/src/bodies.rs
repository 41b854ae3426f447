/// Jovian system data: Jupiter, its rings and the eight moons drawn around it.
///
/// Radii and sizes are screen pixels. Angular increments are radians per
/// frame. Orbital periods are real values in Earth days, kept for display
/// and reference only; they do not drive the animation.

// ── Window ───────────────────────────────────────────────────────────

pub const TITLE: &str = "Jovian System Simulation";
pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 600.0;

/// Screen position of Jupiter; every orbit is centered here.
pub const CENTER: (f64, f64) = (400.0, 300.0);

// ── Backdrop grid ────────────────────────────────────────────────────

pub const GRID_SPACING: f32 = 40.0;
/// Grid lines run over this extent on both axes, past the bottom edge.
pub const GRID_EXTENT: f32 = 800.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;

// ── Jupiter ──────────────────────────────────────────────────────────

pub const JUPITER_RADIUS: f32 = 27.0;
pub const JUPITER_COLOR: (u8, u8, u8) = (255, 229, 204);

// ── Rings ────────────────────────────────────────────────────────────

pub const RING_ALPHA: f32 = 0.7;

/// An unfilled ring around Jupiter.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub name: &'static str,
    pub radius: f32,
    pub color: (u8, u8, u8),
    pub width: f32,
}

pub const RINGS: [Ring; 4] = [
    Ring { name: "Halo",       radius: 38.0, color: (176, 196, 222), width: 9.0 },
    Ring { name: "Main ring",  radius: 46.0, color: (255, 99, 71),   width: 7.0 },
    Ring { name: "Gossamer 1", radius: 55.0, color: (218, 165, 32),  width: 8.5 },
    Ring { name: "Gossamer 2", radius: 65.0, color: (152, 251, 152), width: 9.0 },
];

// ── Moons ────────────────────────────────────────────────────────────

pub const ORBIT_GUIDE_WIDTH: f32 = 0.5;

/// Labels sit at this fixed angle on their anchor circle (straight down).
pub const LABEL_ANGLE_DEG: f64 = 90.0;
/// Labels are lifted this far above their anchor point.
pub const LABEL_LIFT: f64 = 10.0;

/// Font used for a moon label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFont {
    pub family: &'static str,
    pub size: f32,
}

pub const GALILEAN_FONT: LabelFont = LabelFont { family: "Times New Roman", size: 14.0 };
pub const INNER_FONT: LabelFont = LabelFont { family: "Arial", size: 10.0 };

/// Static description of one moon.
#[derive(Debug, Clone, Copy)]
pub struct Moon {
    pub name: &'static str,
    pub label: &'static str,
    /// Orbital radius in pixels.
    pub radius: f64,
    /// Radians added to the angle each frame.
    pub increment: f64,
    /// Real orbital period in Earth days.
    pub period_days: f64,
    pub color: (u8, u8, u8),
    /// Drawn circle radius in pixels.
    pub size: f32,
    /// Label anchor radius is `radius + label_pad`.
    pub label_pad: f64,
    /// Extra horizontal shift of the label.
    pub label_offset: f64,
    pub font: LabelFont,
}

impl Moon {
    /// Top-left position of this moon's label.
    pub fn label_position(&self) -> (f64, f64) {
        let r = self.radius + self.label_pad;
        let theta = LABEL_ANGLE_DEG.to_radians();
        (
            CENTER.0 + r * theta.cos() + self.label_offset,
            CENTER.1 + r * theta.sin() - LABEL_LIFT,
        )
    }
}

const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Galilean moons first, then the inner moons.
pub const MOONS: [Moon; 8] = [
    Moon { name: "Io",       label: "IO",       radius: 100.0, increment: 0.05, period_days: 1.8,  color: (212, 198, 107), size: 10.0, label_pad: 12.0, label_offset: 0.0, font: GALILEAN_FONT },
    Moon { name: "Europa",   label: "EUROPA",   radius: 150.0, increment: 0.03, period_days: 3.5,  color: (222, 223, 227), size: 10.0, label_pad: 7.0,  label_offset: 0.0, font: GALILEAN_FONT },
    Moon { name: "Ganymede", label: "GANYMEDE", radius: 240.0, increment: 0.02, period_days: 7.1,  color: (143, 128, 113), size: 10.0, label_pad: 6.0,  label_offset: 0.0, font: GALILEAN_FONT },
    Moon { name: "Callisto", label: "CALLISTO", radius: 290.0, increment: 0.01, period_days: 16.7, color: (180, 162, 133), size: 10.0, label_pad: 11.0, label_offset: 0.0, font: GALILEAN_FONT },
    Moon { name: "Metis",    label: "METIS",    radius: 45.0,  increment: 0.1,  period_days: 0.3,  color: WHITE,           size: 5.0,  label_pad: 9.0,  label_offset: 2.0, font: INNER_FONT },
    Moon { name: "Adrastea", label: "ADRASTEA", radius: 50.0,  increment: 0.1,  period_days: 0.4,  color: WHITE,           size: 5.0,  label_pad: 9.0,  label_offset: 2.0, font: INNER_FONT },
    Moon { name: "Amalthea", label: "AMALTHEA", radius: 60.0,  increment: 0.07, period_days: 1.0,  color: WHITE,           size: 5.5,  label_pad: 9.0,  label_offset: 2.0, font: INNER_FONT },
    Moon { name: "Thebe",    label: "THEBE",    radius: 70.5,  increment: 0.06, period_days: 1.8,  color: WHITE,           size: 5.5,  label_pad: 9.0,  label_offset: 2.0, font: INNER_FONT },
];

pub const MOON_COUNT: usize = MOONS.len();

/// Index of Io in [`MOONS`].
pub const IO: usize = 0;

// ── Play/pause button ────────────────────────────────────────────────

pub const BUTTON_POS: (f32, f32) = (10.0, 10.0);
pub const BUTTON_SIZE: (f32, f32) = (48.0, 48.0);
pub const BUTTON_BORDER_WIDTH: f32 = 0.5;
pub const BUTTON_CORNER_RADIUS: f32 = 5.0;
pub const BUTTON_FONT: LabelFont = LabelFont { family: "Segoe UI Emoji", size: 33.0 };
/// Shown while the animation runs.
pub const PAUSE_GLYPH: &str = "\u{23F8}";
/// Shown while the animation is stopped.
pub const PLAY_GLYPH: &str = "\u{25B6}";
