use num_traits::{Float, FromPrimitive};

/// Discrete gradient of `y` sampled at a uniform `spacing`.
///
/// Centered differences at interior points, one-sided differences at
/// the two endpoints. Callers must pass at least 2 samples.
pub fn gradient<T>(y: &[T], spacing: T) -> Vec<T>
where
    T: Float + FromPrimitive,
{
    let n = y.len();
    debug_assert!(n >= 2, "gradient needs at least 2 samples");
    let double = T::from_usize(2).unwrap() * spacing;

    let mut grad = Vec::with_capacity(n);
    grad.push((y[1] - y[0]) / spacing);
    for i in 1..n - 1 {
        grad.push((y[i + 1] - y[i - 1]) / double);
    }
    grad.push((y[n - 1] - y[n - 2]) / spacing);
    grad
}
