//! Tear geometry for the error reveal.
//!
//! When the UI "tears open" a row to show error detail, it renders two
//! flaps: the sheet above the tear and the sheet below it. Each flap is
//! clipped by a jagged polygonal edge. Both edges are derived from one
//! shared [`TearProfile`], which is what makes them interlock: at every
//! sampled x position the top edge's y and the bottom edge's y sum to
//! exactly 100%, so the closed flaps reassemble into a straight line.
//!
//! Drawing the two edges from independent random samples breaks that
//! property — the generator never exposes a way to do it, and the tests
//! pin the invariant down.
//!
//! All coordinates are percentages of the flap's own box, so the caller
//! can scale the polygons to any pixel size.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Lower clamp for a tear offset, percent of flap height.
/// Keeps the tear from touching the flap's outer edge.
pub const MIN_OFFSET_PCT: f64 = 2.0;

/// Upper clamp for a tear offset, percent of flap height.
/// Keeps the tear from crossing the whole flap.
pub const MAX_OFFSET_PCT: f64 = 25.0;

/// A vertex in percent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The shared jagged profile of one tear instance.
///
/// Holds `segments + 1` offsets, one per sampled x position from 0% to
/// 100%. Generated once per reveal; both flap edges read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TearProfile {
    offsets: Vec<f64>,
}

impl TearProfile {
    /// Generate a profile with `point_count` segments.
    ///
    /// `point_count` is clamped to at least 2. A seed makes the profile
    /// fully reproducible; `None` draws a fresh random instance.
    pub fn generate(point_count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_with(point_count, &mut rng)
    }

    fn generate_with(point_count: usize, rng: &mut impl Rng) -> Self {
        let segments = point_count.max(2);

        // One waveform per profile: a low-frequency sine keeps the tear
        // coherent instead of uniformly noisy, per-point jitter keeps it
        // from looking machine-drawn.
        let cycles = rng.gen_range(1.5..3.5);
        let phase = rng.gen_range(0.0..std::f64::consts::TAU);
        let amplitude = rng.gen_range(5.0..9.0);
        let center = rng.gen_range(10.0..16.0);

        let offsets = (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                let smooth =
                    center + amplitude * (std::f64::consts::TAU * cycles * t + phase).sin();
                let jitter = rng.gen_range(-3.0..3.0);
                (smooth + jitter).clamp(MIN_OFFSET_PCT, MAX_OFFSET_PCT)
            })
            .collect();

        Self { offsets }
    }

    /// The raw offsets, percent of flap height. Length is `segments + 1`.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of segments (one less than the number of offsets).
    pub fn segments(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The x position of sample `i`, percent of flap width.
    fn x_at(&self, i: usize) -> f64 {
        i as f64 * 100.0 / self.segments() as f64
    }

    /// The top flap's boundary: top-left corner, top-right corner, then
    /// the jagged lower edge left-to-right at `y = 100 - offset(i)`,
    /// closing back to x = 0.
    pub fn top_edge(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.offsets.len() + 2);
        points.push(Point::new(0.0, 0.0));
        points.push(Point::new(100.0, 0.0));
        for (i, offset) in self.offsets.iter().enumerate() {
            points.push(Point::new(self.x_at(i), 100.0 - offset));
        }
        points
    }

    /// The bottom flap's boundary: the jagged upper edge left-to-right
    /// at `y = offset(i)`, then bottom-right and bottom-left corners.
    pub fn bottom_edge(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.offsets.len() + 2);
        for (i, offset) in self.offsets.iter().enumerate() {
            points.push(Point::new(self.x_at(i), *offset));
        }
        points.push(Point::new(100.0, 100.0));
        points.push(Point::new(0.0, 100.0));
        points
    }
}

/// Render an edge as a CSS `polygon(...)` clip-path value.
///
/// Coordinates are already percentages; two decimals is below pixel
/// resolution at any plausible flap size.
pub fn clip_path_polygon(points: &[Point]) -> String {
    let vertices: Vec<String> = points
        .iter()
        .map(|p| format!("{:.2}% {:.2}%", p.x, p.y))
        .collect();
    format!("polygon({})", vertices.join(", "))
}
