//! Exponential variates for interarrival and service times.

/// Floor applied to every uniform draw before taking its logarithm.
///
/// Keeps `ln(u)` finite when the source returns exactly 0.0. Draws below the
/// floor are clamped, so the largest variate a call can return is
/// `-mean * ln(1e-10) ≈ 23.03 * mean`.
pub const MIN_UNIFORM: f64 = 1e-10;

/// A source of uniform draws on [0.0, 1.0).
///
/// The engine only ever needs one uniform per variate, so anything that can
/// hand out a sequence of floats can drive a simulation: the seeded
/// [`RngManager`](super::RngManager) in production, a fixed script in tests.
pub trait UniformSource {
    /// Return the next uniform draw.
    fn next_uniform(&mut self) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<T: UniformSource + ?Sized> UniformSource for Box<T> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Draw one exponentially distributed duration with the given mean.
///
/// Consumes exactly one uniform from `source`.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::rng::{exponential, RngManager};
///
/// let mut rng = RngManager::new(42);
/// let service_time = exponential(&mut rng, 0.5);
/// assert!(service_time >= 0.0);
/// ```
pub fn exponential<S: UniformSource + ?Sized>(source: &mut S, mean: f64) -> f64 {
    let u = source.next_uniform().max(MIN_UNIFORM);
    -mean * u.ln()
}
