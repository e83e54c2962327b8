// Shared field geometry and display tuning used by the engine and frontends.
//
// Scene axes: x runs horizontally across the field, y is vertical, z is depth
// from behind the release point toward home plate (increasing z approaches
// the batter).

/// Depth of the front edge of home plate. A flight is over once its z
/// coordinate reaches or passes this plane.
pub const PLATE_PLANE_Z: f32 = 55.0;

/// Valid strike-zone cell indices for a combo key.
pub const ZONE_MIN: u8 = 1;
pub const ZONE_MAX: u8 = 9;

/// Ball radius in scene units, used by renderers for sizing.
pub const BALL_RADIUS: f32 = 0.12;

/// Suggested display colors per pitch-type code. Cosmetic only; renderers
/// may substitute their own materials.
pub const PITCH_TYPE_COLORS: &[(&str, [f32; 3])] = &[
    ("FF", [0.92, 0.26, 0.21]), // four-seam, red
    ("SI", [0.95, 0.55, 0.20]), // sinker, orange
    ("FC", [0.75, 0.35, 0.60]), // cutter, magenta
    ("SL", [0.25, 0.55, 0.95]), // slider, blue
    ("CU", [0.30, 0.80, 0.90]), // curveball, cyan
    ("CH", [0.35, 0.80, 0.40]), // changeup, green
    ("FS", [0.55, 0.45, 0.90]), // splitter, violet
    ("KC", [0.85, 0.75, 0.25]), // knuckle-curve, gold
];

/// Neutral color for pitch types not in the palette.
pub const PITCH_TYPE_FALLBACK_COLOR: [f32; 3] = [0.7, 0.7, 0.7];

/// Look up the suggested color for a pitch-type code.
#[inline]
pub fn pitch_color(pitch_type: &str) -> [f32; 3] {
    PITCH_TYPE_COLORS
        .iter()
        .find(|(code, _)| *code == pitch_type)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(PITCH_TYPE_FALLBACK_COLOR)
}
