use log::trace;

use crate::coord::Coord;
use crate::flat::iter_coords;
use crate::geometry::Point;

/// Accumulates the arithmetic mean of a set of coordinates.
///
/// Only X and Y are read.
#[derive(Debug, Clone, Default)]
pub struct PointCentroidCalculator {
    sum: [f64; 2],
    count: usize,
}

impl PointCentroidCalculator {
    /// Create a calculator with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the coordinate of `point`. Empty points are ignored.
    pub fn add_point(&mut self, point: &Point) {
        if let Some(coord) = point.coord() {
            self.add_coord(coord.as_slice());
        }
    }

    /// Add a single coordinate.
    pub fn add_coord(&mut self, coord: &[f64]) {
        self.sum[0] += coord[0];
        self.sum[1] += coord[1];
        self.count += 1;
    }

    /// Add every coordinate of a flat buffer.
    pub fn add_flat_coords(&mut self, flat_coords: &[f64], stride: usize) {
        iter_coords(flat_coords, stride).for_each(|coord| self.add_coord(coord));
    }

    /// The number of coordinates added so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean of every coordinate added, or `[NaN, NaN]` if there were none.
    pub fn centroid(&self) -> Coord {
        if self.count == 0 {
            trace!("point centroid of no coordinates is undefined");
            return Coord::new(vec![f64::NAN, f64::NAN]);
        }
        let n = self.count as f64;
        Coord::new(vec![self.sum[0] / n, self.sum[1] / n])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn no_input_is_nan() {
        assert!(PointCentroidCalculator::new().centroid().is_nan());
    }

    #[test]
    fn mean_of_square_corners() {
        let mut calculator = PointCentroidCalculator::new();
        calculator.add_flat_coords(&[0., 0., 2., 0., 2., 2., 0., 2.], 2);
        assert_eq!(calculator.count(), 4);
        assert_eq!(calculator.centroid(), [1., 1.]);
    }

    #[test]
    fn points_and_empty_points() {
        let mut calculator = PointCentroidCalculator::new();
        calculator.add_point(&Point::new_flat(Layout::XYZ, vec![0., 0., 100.]));
        calculator.add_point(&Point::new(Layout::XY));
        calculator.add_coord(&[4., 2.]);
        assert_eq!(calculator.count(), 2);
        assert_eq!(calculator.centroid(), [2., 1.]);
    }
}
