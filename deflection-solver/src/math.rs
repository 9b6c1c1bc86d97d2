//! Closed-form Euler–Bernoulli results for a simply supported beam

use nalgebra::DVector;

/// Column of sampled values along the span
pub type Samples = DVector<f64>;

/// `n` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last value is pinned to `stop` so the grid never falls short of the
/// far support through accumulated rounding.
pub fn linspace(start: f64, stop: f64, n: usize) -> Samples {
    if n == 0 {
        return Samples::zeros(0);
    }
    if n == 1 {
        return Samples::from_element(1, start);
    }

    let step = (stop - start) / (n - 1) as f64;
    let mut samples = Samples::from_fn(n, |i, _| start + i as f64 * step);
    samples[n - 1] = stop;
    samples
}

/// Midspan deflection under a central point load: δ = P·L³ / (48·E·I)
pub fn point_load_max_deflection(p: f64, length: f64, e: f64, i: f64) -> f64 {
    (p * length.powi(3)) / (48.0 * e * i)
}

/// Midspan deflection under a UDL: δ = 5·w·L⁴ / (384·E·I)
pub fn udl_max_deflection(w: f64, length: f64, e: f64, i: f64) -> f64 {
    (5.0 * w * length.powi(4)) / (384.0 * e * i)
}

/// Parabolic profile through zero at both supports and `delta_max` at midspan
pub fn point_load_shape(x: f64, length: f64, delta_max: f64) -> f64 {
    4.0 * delta_max / length.powi(2) * x * (length - x)
}

/// Quartic profile through zero at both supports and `delta_max` at midspan
pub fn udl_shape(x: f64, length: f64, delta_max: f64) -> f64 {
    (delta_max * 16.0 / length.powi(4)) * x.powi(2) * (length - x).powi(2)
}
