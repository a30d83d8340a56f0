//! Deterministic pseudo-random demo data.
//!
//! Chart content is filler with no contract beyond reproducibility: the
//! same seed always yields the same wall of charts. The generator is a
//! splitmix64 step, which is plenty for demo series and keeps the crate
//! free of a randomness dependency.

/// Default seed for demo data generation.
pub const DEFAULT_SEED: u64 = 42;

/// Stream offset separating KPI values from chart series at the same index.
const KPI_STREAM: u64 = 0x6b70_69;

/// Seeded generator for demo series.
#[derive(Debug, Clone)]
pub struct DemoRng {
    state: u64,
}

impl DemoRng {
    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// Creates the generator for a specific grid cell.
    ///
    /// Mixing the cell index into the seed gives every cell an independent
    /// stream while keeping the whole wall reproducible from one seed.
    pub fn for_cell(seed: u64, cell: usize) -> Self {
        let mix = (cell as u64)
            .wrapping_add(1)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self::new(seed ^ mix)
    }

    /// Derives a fresh wall seed from the current one (the reseed action).
    pub fn reseed(seed: u64) -> u64 {
        Self::new(seed).next_u64()
    }

    fn next_u64(&mut self) -> u64 {
        // splitmix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in [0, 1).
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in [lo, hi). `hi` must be greater than `lo`.
    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(hi > lo);
        let span = (hi - lo) as u64;
        lo + (self.next_u64() % span) as i64
    }

    /// Roughly-normal value (mean 0, sigma ~0.7) from summed uniforms.
    pub fn normal(&mut self) -> f64 {
        let sum: f64 = (0..6).map(|_| self.unit()).sum();
        sum - 3.0
    }
}

/// Five bar values in [1, 10).
pub fn bar_values(rng: &mut DemoRng) -> Vec<u64> {
    (0..5).map(|_| rng.range(1, 10) as u64).collect()
}

/// Twenty line samples: `sin(x + cell)` over x in [0, 10] plus small noise.
pub fn line_points(rng: &mut DemoRng, cell: usize) -> Vec<(f64, f64)> {
    let phase = cell as f64;
    (0..20)
        .map(|i| {
            let x = i as f64 * 10.0 / 19.0;
            let y = (x + phase).sin() + 0.1 * rng.normal();
            (x, y)
        })
        .collect()
}

/// Thirty roughly-normal (x, y) scatter points.
pub fn scatter_points(rng: &mut DemoRng) -> Vec<(f64, f64)> {
    (0..30).map(|_| (rng.normal(), rng.normal())).collect()
}

/// Three pie shares in [1, 5), labeled A/B/C by position.
pub fn pie_shares(rng: &mut DemoRng) -> [u64; 3] {
    [
        rng.range(1, 5) as u64,
        rng.range(1, 5) as u64,
        rng.range(1, 5) as u64,
    ]
}

/// One KPI reading for the metrics strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    /// Headline value in [100, 9999).
    pub value: i64,
    /// Signed delta in [-500, 500).
    pub delta: i64,
}

/// KPI for metrics-strip position `cell`, independent of the chart streams.
pub fn kpi_for_cell(seed: u64, cell: usize) -> Kpi {
    let mut rng = DemoRng::for_cell(seed ^ KPI_STREAM, cell);
    Kpi {
        value: rng.range(100, 9999),
        delta: rng.range(-500, 500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = DemoRng::new(7);
        let mut b = DemoRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_cells_different_streams() {
        let mut a = DemoRng::for_cell(DEFAULT_SEED, 0);
        let mut b = DemoRng::for_cell(DEFAULT_SEED, 1);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_reseed_changes_seed() {
        let next = DemoRng::reseed(DEFAULT_SEED);
        assert_ne!(next, DEFAULT_SEED);
        // Reseeding is itself deterministic
        assert_eq!(next, DemoRng::reseed(DEFAULT_SEED));
    }

    #[test]
    fn test_unit_in_half_open_interval() {
        let mut rng = DemoRng::new(3);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v), "unit out of range: {v}");
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = DemoRng::new(5);
        for _ in 0..1000 {
            let v = rng.range(-500, 500);
            assert!((-500..500).contains(&v), "range out of bounds: {v}");
        }
    }

    #[test]
    fn test_bar_values_shape_and_bounds() {
        let mut rng = DemoRng::for_cell(DEFAULT_SEED, 0);
        let values = bar_values(&mut rng);
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|v| (1..10).contains(v)));
    }

    #[test]
    fn test_line_points_cover_x_domain() {
        let mut rng = DemoRng::for_cell(DEFAULT_SEED, 1);
        let points = line_points(&mut rng, 1);
        assert_eq!(points.len(), 20);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[19].0, 10.0);
        assert!(points.iter().all(|(_, y)| y.abs() < 2.0));
    }

    #[test]
    fn test_line_points_phase_differs_by_cell() {
        let mut rng_a = DemoRng::for_cell(DEFAULT_SEED, 1);
        let mut rng_b = DemoRng::for_cell(DEFAULT_SEED, 1);
        let a = line_points(&mut rng_a, 1);
        let b = line_points(&mut rng_b, 5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_scatter_points_shape() {
        let mut rng = DemoRng::for_cell(DEFAULT_SEED, 2);
        let points = scatter_points(&mut rng);
        assert_eq!(points.len(), 30);
        assert!(points.iter().all(|(x, y)| x.abs() <= 3.0 && y.abs() <= 3.0));
    }

    #[test]
    fn test_pie_shares_bounds() {
        let mut rng = DemoRng::for_cell(DEFAULT_SEED, 3);
        let shares = pie_shares(&mut rng);
        assert!(shares.iter().all(|s| (1..5).contains(s)));
    }

    #[test]
    fn test_kpi_bounds_and_determinism() {
        for cell in 0..10 {
            let kpi = kpi_for_cell(DEFAULT_SEED, cell);
            assert!((100..9999).contains(&kpi.value));
            assert!((-500..500).contains(&kpi.delta));
            assert_eq!(kpi, kpi_for_cell(DEFAULT_SEED, cell));
        }
    }

    #[test]
    fn test_kpi_stream_independent_of_chart_stream() {
        // The KPI stream at an index must not mirror the chart stream there.
        let mut kpi_rng = DemoRng::for_cell(DEFAULT_SEED ^ KPI_STREAM, 0);
        let mut chart_rng = DemoRng::for_cell(DEFAULT_SEED, 0);
        let kpi_draws: Vec<u64> = (0..4).map(|_| kpi_rng.next_u64()).collect();
        let chart_draws: Vec<u64> = (0..4).map(|_| chart_rng.next_u64()).collect();
        assert_ne!(kpi_draws, chart_draws);
    }
}
