use num_traits::{Float, FromPrimitive};

/// `n` evenly spaced values over `[start, stop]`, both endpoints
/// included. The final value is `stop` exactly rather than the
/// accumulated `start + (n - 1) * step`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let step = (stop - start) / T::from_usize(n - 1).unwrap();
    (0..n).map(move |i| {
        if i == n - 1 {
            stop
        } else {
            start + T::from_usize(i).unwrap() * step
        }
    })
}
