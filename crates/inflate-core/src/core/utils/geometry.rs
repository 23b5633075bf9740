use nalgebra::{Point2, Point3};

/// Unweighted mean of the XY components of a set of points.
///
/// Returns `None` for an empty input.
pub fn planar_centroid<'a, I>(points: I) -> Option<Point2<f64>>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    let (sum_x, sum_y, count) = points
        .into_iter()
        .fold((0.0, 0.0, 0usize), |(sx, sy, n), p| (sx + p.x, sy + p.y, n + 1));
    if count == 0 {
        None
    } else {
        let n = count as f64;
        Some(Point2::new(sum_x / n, sum_y / n))
    }
}

/// Planar centroid of the points selected by `indices`.
///
/// Returns `None` if `indices` is empty or any index is out of range.
pub fn planar_centroid_of(positions: &[Point3<f64>], indices: &[usize]) -> Option<Point2<f64>> {
    let selected = indices
        .iter()
        .map(|&i| positions.get(i))
        .collect::<Option<Vec<_>>>()?;
    planar_centroid(selected)
}
