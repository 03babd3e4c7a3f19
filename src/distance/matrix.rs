//! Dense distance matrix.

use std::cmp::Ordering;

use super::DistanceFunction;
use crate::models::GeoPoint;

/// A dense n×n distance matrix stored in row-major order.
///
/// Filled once from a list of points and a [`DistanceFunction`], so that
/// repeated nearest-neighbor scans read cached values. Entries are computed
/// in both directions; the distance function need not be symmetric.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::GeoPoint;
/// use assetflow_routing::distance::{DistanceMatrix, Haversine};
///
/// let points = vec![
///     GeoPoint::new(0.0, 0.0).unwrap(),
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points, &Haversine);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.get(0, 2) > dm.get(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes all pairwise distances between `points`.
    pub fn from_points<D: DistanceFunction>(points: &[GeoPoint], distance: &D) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, distance.distance(points[i], points[j]));
                }
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the position within `candidates` of the nearest one to `from`.
    ///
    /// Ties go to the earliest candidate. NaN distances lose to every
    /// number. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by(|&(_, &a), &(_, &b)| compare_distance(self.get(from, a), self.get(from, b)))
            .map(|(pos, _)| pos)
    }
}

/// Orders distances ascending with NaN last.
fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Haversine;

    fn sample_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0).expect("valid"),
            GeoPoint::new(0.0, 3.0).expect("valid"),
            GeoPoint::new(0.0, 1.0).expect("valid"),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points(), &Haversine);
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!(dm.get(0, 2) < dm.get(0, 1));
        assert!((dm.get(1, 2) - dm.get(2, 1)).abs() < 1e-6);
    }

    #[test]
    fn test_from_points_asymmetric_function() {
        // Moving east costs double.
        let eastward = |a: GeoPoint, b: GeoPoint| {
            let d = b.lng() - a.lng();
            if d > 0.0 {
                2.0 * d
            } else {
                -d
            }
        };
        let dm = DistanceMatrix::from_points(&sample_points(), &eastward);
        assert_eq!(dm.get(0, 1), 6.0);
        assert_eq!(dm.get(1, 0), 3.0);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_points(&sample_points(), &Haversine);
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[1]), Some(0));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_prefers_first() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 4.0, 4.0, 4.0, 0.0, 1.0, 4.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(0));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(0));
    }

    #[test]
    fn test_nearest_neighbor_nan_last() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, f64::NAN, 9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }

    #[test]
    fn test_compare_distance() {
        assert_eq!(compare_distance(1.0, 2.0), Ordering::Less);
        assert_eq!(compare_distance(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(compare_distance(f64::NAN, f64::NAN), Ordering::Equal);
    }
}
