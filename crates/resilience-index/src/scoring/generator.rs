use rand::Rng;

/// Magnitude of the per-request offset shared by sibling metrics.
pub const BASE_VARIATION_SPAN: f64 = 10.0;

/// Shape of a single synthetic metric: its centre, noise band, and clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub base: f64,
    pub noise: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(base: f64, noise: f64, min: f64, max: f64) -> Self {
        Self {
            base,
            noise,
            min,
            max,
        }
    }

    /// Index-style metric bounded to `[0, 100]`.
    pub const fn index(base: f64, noise: f64) -> Self {
        Self::new(base, noise, 0.0, 100.0)
    }

    /// Metric with a floor and no meaningful ceiling (dollar amounts).
    pub const fn floored(base: f64, noise: f64, min: f64) -> Self {
        Self::new(base, noise, min, f64::MAX)
    }
}

/// `base + variation + uniform(-noise/2, noise/2)`, clamped to `[min, max]`.
///
/// Panics when `min > max`; bounds are fixed at compile time so that can only
/// be a defect in a metric table.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    base: f64,
    variation: f64,
    noise_amplitude: f64,
    min: f64,
    max: f64,
) -> f64 {
    let half = noise_amplitude.abs() / 2.0;
    let noise = if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    };
    (base + variation + noise).clamp(min, max)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Random source plus the base variation shared by every metric it samples.
///
/// One generator is built per request so the factors of a single composite
/// move together instead of independently.
#[derive(Debug)]
pub struct MetricGenerator<R> {
    rng: R,
    base_variation: f64,
}

impl<R: Rng> MetricGenerator<R> {
    pub fn new(mut rng: R) -> Self {
        let base_variation = rng.gen_range(-BASE_VARIATION_SPAN..=BASE_VARIATION_SPAN);
        Self {
            rng,
            base_variation,
        }
    }

    pub fn with_base_variation(rng: R, base_variation: f64) -> Self {
        Self {
            rng,
            base_variation,
        }
    }

    pub fn base_variation(&self) -> f64 {
        self.base_variation
    }

    /// Draw a metric whose share of the base variation is scaled by `weight`.
    /// Negative weights model metrics that worsen as resilience improves.
    pub fn sample(&mut self, range: MetricRange, weight: f64) -> f64 {
        generate(
            &mut self.rng,
            range.base,
            self.base_variation * weight,
            range.noise,
            range.min,
            range.max,
        )
    }

    /// Uniform draw in `[low, high]` from the same source.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.rng.gen_range(low..=high)
        } else {
            low
        }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
