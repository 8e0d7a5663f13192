use serde::{Deserialize, Serialize};

/// Samples per window — one simulated day at hourly granularity.
pub const WINDOW_LEN: usize = 24;

/// Inclusive clamp bounds for `iops` (operations per second).
pub const IOPS_BOUNDS: (f64, f64) = (8_000.0, 25_000.0);
/// Inclusive clamp bounds for `latency` (milliseconds).
pub const LATENCY_BOUNDS: (f64, f64) = (0.2, 5.0);
/// Inclusive clamp bounds for `throughput` (MB/s).
pub const THROUGHPUT_BOUNDS: (f64, f64) = (500.0, 2_000.0);

/// One synthetic time-series observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Hour-of-day slot, `0..24`.
    pub hour: u8,
    /// Operations per second.
    pub iops: f64,
    /// Round-trip latency in milliseconds.
    pub latency: f64,
    /// Transfer rate in MB/s.
    pub throughput: f64,
}

impl Sample {
    /// Axis label for this sample's hour slot, e.g. `"14:00"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }

    /// `true` when every metric field sits inside its clamp bounds.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        in_range(self.iops, IOPS_BOUNDS)
            && in_range(self.latency, LATENCY_BOUNDS)
            && in_range(self.throughput, THROUGHPUT_BOUNDS)
    }

    /// IOPS position inside its clamp range, as a fraction in `[0, 1]`.
    #[must_use]
    pub fn iops_fraction(&self) -> f64 {
        fraction(self.iops, IOPS_BOUNDS)
    }

    /// Latency position inside its clamp range, as a fraction in `[0, 1]`.
    #[must_use]
    pub fn latency_fraction(&self) -> f64 {
        fraction(self.latency, LATENCY_BOUNDS)
    }

    /// Throughput position inside its clamp range, as a fraction in `[0, 1]`.
    #[must_use]
    pub fn throughput_fraction(&self) -> f64 {
        fraction(self.throughput, THROUGHPUT_BOUNDS)
    }
}

fn in_range(value: f64, (lo, hi): (f64, f64)) -> bool {
    value >= lo && value <= hi
}

fn fraction(value: f64, (lo, hi): (f64, f64)) -> f64 {
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Fixed-length sliding window of samples, ordered oldest-first.
///
/// A window is an immutable snapshot: advancing it produces a new value and
/// leaves the original untouched. Only the metrics generator constructs next
/// states; consumers get read-only access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsWindow {
    samples: Vec<Sample>,
}

impl MetricsWindow {
    /// Wrap a full day of samples. Callers are expected to supply exactly
    /// [`WINDOW_LEN`] entries, oldest first.
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        debug_assert_eq!(samples.len(), WINDOW_LEN);
        Self { samples }
    }

    /// All samples, oldest first.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The most recent sample (the window tail).
    #[must_use]
    pub fn latest(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    /// New window with the oldest sample evicted and `next` appended.
    #[must_use]
    pub fn slide(&self, next: Sample) -> MetricsWindow {
        let mut samples = Vec::with_capacity(self.samples.len());
        samples.extend_from_slice(&self.samples[1..]);
        samples.push(next);
        MetricsWindow { samples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hour: u8) -> Sample {
        Sample {
            hour,
            iops: 12_000.0,
            latency: 1.0,
            throughput: 900.0,
        }
    }

    #[test]
    fn label_formats_hour_slot() {
        assert_eq!(sample(0).label(), "0:00");
        assert_eq!(sample(23).label(), "23:00");
    }

    #[test]
    fn in_bounds_accepts_clamp_edges() {
        let s = Sample {
            hour: 0,
            iops: IOPS_BOUNDS.0,
            latency: LATENCY_BOUNDS.1,
            throughput: THROUGHPUT_BOUNDS.0,
        };
        assert!(s.in_bounds());
    }

    #[test]
    fn in_bounds_rejects_out_of_range_fields() {
        let mut s = sample(0);
        s.latency = 5.1;
        assert!(!s.in_bounds());
    }

    #[test]
    fn fractions_span_zero_to_one() {
        let mut s = sample(0);
        s.iops = IOPS_BOUNDS.0;
        assert_eq!(s.iops_fraction(), 0.0);
        s.iops = IOPS_BOUNDS.1;
        assert_eq!(s.iops_fraction(), 1.0);
    }

    #[test]
    fn slide_evicts_oldest_and_appends() {
        let window = MetricsWindow::new((0..24).map(|h| sample(h as u8)).collect());
        let next = sample(0);
        let slid = window.slide(next);

        assert_eq!(slid.samples().len(), WINDOW_LEN);
        assert_eq!(slid.samples()[..23], window.samples()[1..]);
        assert_eq!(*slid.latest(), next);
        // The original snapshot is untouched.
        assert_eq!(window.samples()[0].hour, 0);
    }
}
