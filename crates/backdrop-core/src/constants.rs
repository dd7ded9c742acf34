// Shared visual tuning constants for the ambient field, the particle emitter,
// the cursor effects and the magnetic controls. Colours are sRGB in 0..1.

// Brand palette
pub const PRIMARY: [f32; 3] = [0.388, 0.400, 0.945]; // #6366f1
pub const SECONDARY: [f32; 3] = [0.925, 0.282, 0.600]; // #ec4899
pub const ACCENT: [f32; 3] = [0.133, 0.827, 0.933]; // #22d3ee
pub const PURPLE: [f32; 3] = [0.659, 0.333, 0.969]; // #a855f7
pub const BLUE: [f32; 3] = [0.231, 0.510, 0.965]; // #3b82f6
pub const TEAL: [f32; 3] = [0.078, 0.722, 0.651]; // #14b8a6
pub const PINK: [f32; 3] = [0.957, 0.447, 0.714]; // #f472b6
pub const INDIGO: [f32; 3] = [0.506, 0.549, 0.973]; // #818cf8

// Gradient pairs, in palette order. Particles use the first seven.
pub const GRADIENT_STOPS: [([f32; 3], [f32; 3]); 8] = [
    (PRIMARY, SECONDARY),
    (SECONDARY, ACCENT),
    (ACCENT, PURPLE),
    (PURPLE, BLUE),
    (BLUE, TEAL),
    (TEAL, PINK),
    (PINK, INDIGO),
    (INDIGO, PRIMARY),
];
pub const PARTICLE_GRADIENT_COUNT: usize = 7;

pub const AMBIENT_ALPHA: f32 = 0.25;
pub const PARTICLE_ALPHA: f32 = 0.70;
pub const DOT_ALPHA: f32 = 0.30;

// Ambient field
pub const AMBIENT_SHAPE_COUNT: usize = 30;
pub const AMBIENT_SIZE_PX: (f32, f32) = (8.0, 33.0);
pub const AMBIENT_DELAY_SEC: (f32, f32) = (0.0, 3.0);
pub const AMBIENT_DURATION_SEC: (f32, f32) = (3.0, 7.0);
pub const AMBIENT_DRIFT_PX: f32 = 12.5; // max horizontal sway of circles
pub const FALLBACK_POSITION_PERCENT: f32 = 50.0; // used when the viewport is 0x0

// Floating dots (timing shared with the ambient shapes)
pub const DOT_COUNT: usize = 35;
pub const DOT_SIZE_PX: (f32, f32) = (2.0, 8.0);
pub const DOT_DRIFT_PX: f32 = 15.0;

// Geometric squares on a fixed diagonal
pub const GEO_SQUARE_COUNT: usize = 6;
pub const GEO_SQUARE_SIZE_PX: f32 = 16.0;
pub const GEO_SQUARE_ORIGIN_PCT: [f32; 2] = [20.0, 15.0];
pub const GEO_SQUARE_STEP_PCT: [f32; 2] = [12.0, 10.0];
pub const GEO_SQUARE_DELAY_SEC: (f32, f32) = (0.0, 2.0);
pub const GEO_SQUARE_DURATION_SEC: (f32, f32) = (4.0, 6.0);
pub const GEO_SQUARE_ALPHA: f32 = 0.30;

// Accent waves
pub const WAVE_COUNT: usize = 3;
pub const WAVE_LENGTH_PX: f32 = 192.0;
pub const WAVE_ORIGIN_PCT: [f32; 2] = [10.0, 40.0];
pub const WAVE_STEP_PCT: [f32; 2] = [25.0, 15.0];
pub const WAVE_ANGLE_DEG: f32 = 30.0;
pub const WAVE_ANGLE_STEP_DEG: f32 = 20.0;
pub const WAVE_DELAY_SEC: (f32, f32) = (0.0, 2.0);
pub const WAVE_DURATION_SEC: (f32, f32) = (3.0, 5.0);
pub const WAVE_ALPHA: f32 = 0.20;
pub const WAVE_OPACITY: (f32, f32) = (0.1, 0.6);
pub const WAVE_STRETCH: (f32, f32) = (0.5, 1.8);

// Backdrop grid
pub const GRID_VERTICAL_LINES: usize = 25;
pub const GRID_HORIZONTAL_LINES: usize = 20;
pub const GRID_DELAY_SEC: (f32, f32) = (0.0, 2.0);
pub const GRID_VERTICAL_DURATION_SEC: (f32, f32) = (2.0, 4.0);
pub const GRID_HORIZONTAL_DURATION_SEC: (f32, f32) = (2.5, 4.5);
pub const GRID_ALPHA: f32 = 0.15;
pub const GRID_OPACITY: (f32, f32) = (0.1, 0.4);
pub const GRID_STRETCH: (f32, f32) = (0.8, 1.3);

// Corner accents
pub const CORNER_SIZE_PX: f32 = 160.0;
pub const CORNER_ALPHA: f32 = 0.25;
pub const CORNER_PERIOD_SEC: f32 = 5.0;
pub const CORNER_STAGGER_SEC: f32 = 1.0;
pub const CORNER_SCALE: (f32, f32) = (1.0, 1.2);
pub const CORNER_OPACITY: (f32, f32) = (0.2, 0.5);

// Particle emitter
pub const PARTICLE_CAP: usize = 120;
pub const PARTICLE_DAMPING: f32 = 0.98; // per-tick velocity multiplier
pub const SPAWN_PROBABILITY_PRESSED: f64 = 0.4;
pub const SPAWN_PROBABILITY_AMBIENT: f64 = 0.15;
pub const PARTICLE_SPEED_MAX: f32 = 2.5; // px per tick, per axis
pub const PARTICLE_SIZE_PX: (f32, f32) = (3.0, 13.0);
pub const PARTICLE_LIFETIME_TICKS: (u32, u32) = (60, 180);
pub const SPAWN_FALLBACK_PX: [f32; 2] = [0.0, 0.0]; // ambient spawn point for a 0x0 viewport

// Proximity links
pub const LINK_PREFIX: usize = 25;
pub const LINK_WINDOW: usize = 11;
pub const LINK_DISTANCE_PX: f32 = 120.0;
pub const LINK_ALPHA: f32 = 0.25;
pub const LINK_OPACITY: (f32, f32) = (0.1, 0.4);
pub const LINK_PERIOD_SEC: f32 = 2.5;

// Cursor effects
pub const TRAIL_DIAMETER_PX: f32 = 32.0;
pub const TRAIL_PERIOD_SEC: f32 = 1.0;
pub const TRAIL_INNER_DIAMETER_PX: f32 = 24.0;
pub const TRAIL_INNER_PERIOD_SEC: f32 = 0.8;
pub const FIELD_LARGE_DIAMETER_PX: f32 = 448.0;
pub const FIELD_LARGE_PERIOD_SEC: f32 = 3.0;
pub const FIELD_SMALL_DIAMETER_PX: f32 = 256.0;
pub const FIELD_SMALL_PERIOD_SEC: f32 = 2.5;
pub const ORB_LARGE_DIAMETER_PX: f32 = 512.0;
pub const ORB_LARGE_RANGE_PX: [f32; 2] = [300.0, 300.0];
pub const ORB_SMALL_DIAMETER_PX: f32 = 256.0;
pub const ORB_SMALL_RANGE_PX: [f32; 2] = [-200.0, 200.0];

// Press bursts
pub const BURST_DOTS: usize = 8;
pub const BURST_DOT_SIZE_PX: f32 = 12.0;
pub const BURST_DOT_TRAVEL_PX: f32 = 60.0;
pub const BURST_DURATION_SEC: f32 = 1.2;
pub const BURST_RING_OUTER_PX: f32 = 250.0;
pub const BURST_RING_INNER_PX: f32 = 180.0;
pub const BURST_RING_INNER_DELAY_SEC: f32 = 0.2;
pub const BURST_RING_INNER_DURATION_SEC: f32 = 0.8;
pub const MAX_ACTIVE_BURSTS: usize = 4;

// Magnetic controls (spring in the style of a UI motion library)
pub const SPRING_STIFFNESS: f32 = 700.0;
pub const SPRING_DAMPING: f32 = 25.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // frames longer than this are clamped
pub const SPRING_REST_DELTA: f32 = 0.01;

pub const TILT_INPUT_RANGE: f32 = 0.5; // offset that reaches full tilt
pub const TILT_MAX_DEG: f32 = 15.0;
pub const HOVER_SCALE: f32 = 1.05;
pub const PRESS_SCALE: f32 = 0.95;
