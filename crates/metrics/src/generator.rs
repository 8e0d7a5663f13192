use rand::Rng;
use sentinel_core::metrics::{
    MetricsWindow, Sample, IOPS_BOUNDS, LATENCY_BOUNDS, THROUGHPUT_BOUNDS, WINDOW_LEN,
};

/// Uniform-draw capability backing both seeding and per-tick perturbation.
///
/// Blanket-implemented for every [`rand::Rng`], so production code hands in
/// an entropy or seeded RNG while tests pin draws to interval extremes.
pub trait Noise {
    /// Draw a value uniformly from the closed interval `[lo, hi]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: Rng> Noise for R {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.gen_range(lo..=hi)
    }
}

/// Distribution parameters for the generator.
///
/// Seed ranges and per-tick steps are independent knobs; nothing requires the
/// two distributions to agree. The defaults reproduce the reference constants.
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    /// Seed interval for `iops`.
    pub seed_iops: (f64, f64),
    /// Seed interval for `latency`.
    pub seed_latency: (f64, f64),
    /// Seed interval for `throughput`.
    pub seed_throughput: (f64, f64),
    /// Maximum absolute per-tick step for `iops`.
    pub step_iops: f64,
    /// Maximum absolute per-tick step for `latency`.
    pub step_latency: f64,
    /// Maximum absolute per-tick step for `throughput`.
    pub step_throughput: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed_iops:       (12_000.0, 17_000.0),
            seed_latency:    (0.5, 2.5),
            seed_throughput: (800.0, 1_200.0),
            step_iops:       2_000.0,
            step_latency:    0.25,
            step_throughput: 100.0,
        }
    }
}

/// Seed a full day of samples covering hours `0:00` through `23:00` in order.
///
/// The default seed intervals sit inside the clamp bounds, so no clamping is
/// applied at this stage.
pub fn initialize<N: Noise>(params: &GeneratorParams, noise: &mut N) -> MetricsWindow {
    let samples = (0..WINDOW_LEN)
        .map(|hour| Sample {
            hour:       hour as u8,
            iops:       noise.uniform(params.seed_iops.0, params.seed_iops.1),
            latency:    noise.uniform(params.seed_latency.0, params.seed_latency.1),
            throughput: noise.uniform(params.seed_throughput.0, params.seed_throughput.1),
        })
        .collect();
    MetricsWindow::new(samples)
}

/// Advance `previous` by one sample: perturb the window tail, clamp every
/// field into its bounds, evict the oldest sample and append the new one.
///
/// Pure over the previous snapshot — the input window is left unmodified and
/// the operation cannot fail.
pub fn tick<N: Noise>(
    params: &GeneratorParams,
    previous: &MetricsWindow,
    noise: &mut N,
) -> MetricsWindow {
    let last = previous.latest();
    let next = Sample {
        hour: (last.hour + 1) % WINDOW_LEN as u8,
        iops: clamp(
            last.iops + noise.uniform(-params.step_iops, params.step_iops),
            IOPS_BOUNDS,
        ),
        latency: clamp(
            last.latency + noise.uniform(-params.step_latency, params.step_latency),
            LATENCY_BOUNDS,
        ),
        throughput: clamp(
            last.throughput + noise.uniform(-params.step_throughput, params.step_throughput),
            THROUGHPUT_BOUNDS,
        ),
    };
    previous.slide(next)
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Noise pinned to one end of every requested interval.
    struct Pinned {
        hi: bool,
    }

    impl Noise for Pinned {
        fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
            if self.hi {
                hi
            } else {
                lo
            }
        }
    }

    fn seeded_window() -> MetricsWindow {
        let mut rng = StdRng::seed_from_u64(7);
        initialize(&GeneratorParams::default(), &mut rng)
    }

    #[test]
    fn initialize_covers_one_day_in_order() {
        let window = seeded_window();

        assert_eq!(window.samples().len(), WINDOW_LEN);
        for (i, sample) in window.samples().iter().enumerate() {
            assert_eq!(sample.hour as usize, i);
            assert_eq!(sample.label(), format!("{i}:00"));
            assert!(sample.in_bounds(), "seeded sample {i} out of bounds");
        }
    }

    #[test]
    fn tick_is_a_pure_sliding_window() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(11);
        let window = seeded_window();
        let before = window.clone();

        let next = tick(&params, &window, &mut rng);

        assert_eq!(next.samples().len(), WINDOW_LEN);
        assert_eq!(next.samples()[..WINDOW_LEN - 1], window.samples()[1..]);
        assert_eq!(next.latest().hour, (window.latest().hour + 1) % 24);
        assert_eq!(window, before, "input window must not be modified");
    }

    #[test]
    fn clamps_hold_when_noise_is_pinned_high() {
        let params = GeneratorParams::default();
        let mut noise = Pinned { hi: true };
        let mut window = initialize(&params, &mut noise);

        for _ in 0..10 {
            window = tick(&params, &window, &mut noise);
            assert!(window.latest().in_bounds());
        }
        // Constant +2000 steps must have saturated at the ceiling.
        assert_eq!(window.latest().iops, IOPS_BOUNDS.1);
        assert_eq!(window.latest().latency, LATENCY_BOUNDS.1);
        assert_eq!(window.latest().throughput, THROUGHPUT_BOUNDS.1);
    }

    #[test]
    fn clamps_hold_when_noise_is_pinned_low() {
        let params = GeneratorParams::default();
        let mut noise = Pinned { hi: false };
        let mut window = initialize(&params, &mut noise);

        for _ in 0..25 {
            window = tick(&params, &window, &mut noise);
            assert!(window.latest().in_bounds());
        }
        assert_eq!(window.latest().iops, IOPS_BOUNDS.0);
        assert_eq!(window.latest().latency, LATENCY_BOUNDS.0);
        assert_eq!(window.latest().throughput, THROUGHPUT_BOUNDS.0);
    }

    #[test]
    fn thousand_ticks_never_leave_bounds() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(1337);
        let mut window = initialize(&params, &mut rng);

        for i in 0..1_000 {
            window = tick(&params, &window, &mut rng);
            for sample in window.samples() {
                assert!(sample.in_bounds(), "sample out of bounds after tick {i}");
            }
        }
    }

    #[test]
    fn hour_labels_cycle_after_a_full_day_of_ticks() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut window = seeded_window();
        let start = window.latest().hour;

        let mut seen = Vec::new();
        for _ in 0..WINDOW_LEN {
            window = tick(&params, &window, &mut rng);
            seen.push(window.latest().hour);
        }

        assert_eq!(window.latest().hour, start);
        // No slot skipped or repeated within the rotation.
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), WINDOW_LEN);
    }

    #[test]
    fn four_ticks_advance_the_tail_by_four_hours() {
        let params = GeneratorParams::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut window = seeded_window();
        let start = window.latest().hour;

        for _ in 0..4 {
            let next = tick(&params, &window, &mut rng);
            assert_eq!(next.samples()[..WINDOW_LEN - 1], window.samples()[1..]);
            assert!(next.samples().iter().all(Sample::in_bounds));
            window = next;
        }

        assert_eq!(window.latest().hour, (start + 4) % 24);
    }
}
