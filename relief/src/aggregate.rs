use crate::ReliefError;
use transect::C;

/// Per-grid-column summary statistics across the resampled rows, each
/// sequence indexed like the common grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Arithmetic mean across profiles.
    pub mean: Vec<C>,

    /// Population standard deviation across profiles.
    pub std: Vec<C>,

    /// Peak-to-peak spread (`max - min`) across profiles.
    pub ptp: Vec<C>,
}

/// Reduces resampled rows (one per profile, one column per grid
/// point) to per-column statistics.
///
/// The rows are treated as the entire observed population, so the
/// standard deviation divides by the row count rather than
/// `count - 1`. A single row yields zero `std` and `ptp` at every
/// column; zero rows is an error, since there is no partial result to
/// produce.
pub fn aggregate(rows: &[Vec<C>]) -> Result<Stats, ReliefError> {
    let Some(first) = rows.first() else {
        return Err(ReliefError::EmptyProfileSet);
    };
    let columns = first.len();
    debug_assert!(rows.iter().all(|row| row.len() == columns));

    #[allow(clippy::cast_precision_loss)]
    let count = rows.len() as C;

    let mut mean = Vec::with_capacity(columns);
    let mut std = Vec::with_capacity(columns);
    let mut ptp = Vec::with_capacity(columns);

    for j in 0..columns {
        let mut sum = 0.0;
        let mut min = C::INFINITY;
        let mut max = C::NEG_INFINITY;
        for row in rows {
            let v = row[j];
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        let mu = sum / count;
        let var = rows.iter().map(|row| (row[j] - mu).powi(2)).sum::<C>() / count;

        mean.push(mu);
        std.push(var.sqrt());
        ptp.push(max - min);
    }

    Ok(Stats { mean, std, ptp })
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use crate::ReliefError;
    use approx::assert_relative_eq;

    #[test]
    fn test_aggregate() {
        let rows = vec![vec![1.0, 4.0, 0.0], vec![3.0, 8.0, 0.0]];
        let stats = aggregate(&rows).unwrap();
        assert_eq!(stats.mean, vec![2.0, 6.0, 0.0]);
        assert_relative_eq!(stats.std[0], 1.0);
        assert_relative_eq!(stats.std[1], 2.0);
        assert_eq!(stats.std[2], 0.0);
        assert_eq!(stats.ptp, vec![2.0, 4.0, 0.0]);
    }

    #[test]
    fn test_population_not_sample_std() {
        // Three values with mean 2; population variance is 2/3, not 1.
        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
        let stats = aggregate(&rows).unwrap();
        assert_relative_eq!(stats.std[0], (2.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn test_single_row_is_not_an_error() {
        let rows = vec![vec![5.0, 9.0]];
        let stats = aggregate(&rows).unwrap();
        assert_eq!(stats.mean, vec![5.0, 9.0]);
        assert_eq!(stats.std, vec![0.0, 0.0]);
        assert_eq!(stats.ptp, vec![0.0, 0.0]);
    }

    #[test]
    fn test_identical_rows_collapse() {
        let row = vec![2.0, 0.0, 4.0, 1.0];
        let stats = aggregate(&[row.clone(), row.clone()]).unwrap();
        assert_eq!(stats.mean, row);
        assert_eq!(stats.std, vec![0.0; 4]);
        assert_eq!(stats.ptp, vec![0.0; 4]);
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert!(matches!(
            aggregate(&[]),
            Err(ReliefError::EmptyProfileSet)
        ));
    }
}
