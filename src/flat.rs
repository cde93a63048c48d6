//! Routines over flat coordinate buffers.
//!
//! A flat buffer stores every coordinate of a geometry back to back, `stride` values per
//! coordinate. Sub-structures are delimited by *ends*: exclusive offsets into the buffer. A
//! single level of ends splits the buffer into rings or lines, two levels (*endss*) split it
//! into polygons of rings.
//!
//! The numbered functions walk one (`*`), two (`*2`) or three (`*3`) levels of nesting.
//! Offsets and ends are in buffer slots, not coordinates.

use geo_traits::CoordTrait;
use log::debug;

use crate::coord::Coord;
use crate::error::{GeomError, Result};
use crate::layout::Layout;

/// The last end of `ends`, or `offset` when there are none.
///
/// Empty polygons inside a multi polygon have no ends and consume no coordinates.
pub(crate) fn last_end(ends: &[usize], offset: usize) -> usize {
    ends.last().copied().unwrap_or(offset)
}

/// Append a single coordinate to `flat_coords`.
pub fn deflate_coord(flat_coords: &mut Vec<f64>, coord: &[f64], stride: usize) -> Result<()> {
    if coord.len() != stride {
        return Err(GeomError::StrideMismatch {
            got: coord.len(),
            want: stride,
        });
    }
    flat_coords.extend_from_slice(coord);
    Ok(())
}

/// Append any [`CoordTrait`] coordinate to `flat_coords`.
///
/// The coordinate's dimension size must equal `stride`.
pub fn deflate_coord_trait(
    flat_coords: &mut Vec<f64>,
    coord: &impl CoordTrait<T = f64>,
    stride: usize,
) -> Result<()> {
    let got = coord.dim().size();
    if got != stride {
        return Err(GeomError::StrideMismatch { got, want: stride });
    }
    flat_coords.extend((0..stride).map(|n| coord.nth_or_panic(n)));
    Ok(())
}

/// Flatten a sequence of coordinates.
///
/// Fails on the first coordinate whose length is not `stride`.
pub fn deflate_coords<C: AsRef<[f64]>>(coords: &[C], stride: usize) -> Result<Vec<f64>> {
    let mut flat_coords = Vec::with_capacity(coords.len() * stride);
    extend_coords(&mut flat_coords, coords, stride)?;
    Ok(flat_coords)
}

/// Flatten a sequence of sequences of coordinates, returning the buffer and its ends.
pub fn deflate_coords2<C, R>(coords: &[R], stride: usize) -> Result<(Vec<f64>, Vec<usize>)>
where
    C: AsRef<[f64]>,
    R: AsRef<[C]>,
{
    let mut flat_coords = vec![];
    let mut ends = Vec::with_capacity(coords.len());
    extend_coords2(&mut flat_coords, &mut ends, coords, stride)?;
    Ok((flat_coords, ends))
}

/// Flatten three levels of coordinates, returning the buffer and its endss.
pub fn deflate_coords3<C, R, P>(
    coords: &[P],
    stride: usize,
) -> Result<(Vec<f64>, Vec<Vec<usize>>)>
where
    C: AsRef<[f64]>,
    R: AsRef<[C]>,
    P: AsRef<[R]>,
{
    let mut flat_coords = vec![];
    let mut endss = Vec::with_capacity(coords.len());
    for polygon in coords {
        let mut ends = Vec::with_capacity(polygon.as_ref().len());
        extend_coords2(&mut flat_coords, &mut ends, polygon.as_ref(), stride)?;
        endss.push(ends);
    }
    Ok((flat_coords, endss))
}

fn extend_coords<C: AsRef<[f64]>>(
    flat_coords: &mut Vec<f64>,
    coords: &[C],
    stride: usize,
) -> Result<()> {
    for coord in coords {
        deflate_coord(flat_coords, coord.as_ref(), stride)?;
    }
    Ok(())
}

fn extend_coords2<C, R>(
    flat_coords: &mut Vec<f64>,
    ends: &mut Vec<usize>,
    coords: &[R],
    stride: usize,
) -> Result<()>
where
    C: AsRef<[f64]>,
    R: AsRef<[C]>,
{
    for line in coords {
        extend_coords(flat_coords, line.as_ref(), stride)?;
        ends.push(flat_coords.len());
    }
    Ok(())
}

/// Copy the coordinate stored at `flat_coords[offset..end]`.
///
/// # Panics
///
/// If `end - offset` is not `stride`.
pub fn inflate_coord(flat_coords: &[f64], offset: usize, end: usize, stride: usize) -> Coord {
    assert_eq!(offset + stride, end, "stride mismatch");
    Coord::from(&flat_coords[offset..end])
}

/// Copy the coordinates stored at `flat_coords[offset..end]`.
pub fn inflate_coords(flat_coords: &[f64], offset: usize, end: usize, stride: usize) -> Vec<Coord> {
    if stride == 0 {
        return vec![];
    }
    flat_coords[offset..end]
        .chunks_exact(stride)
        .map(Coord::from)
        .collect()
}

/// Copy the coordinates of every sub-sequence delimited by `ends`.
pub fn inflate_coords2(
    flat_coords: &[f64],
    mut offset: usize,
    ends: &[usize],
    stride: usize,
) -> Vec<Vec<Coord>> {
    let mut coords = Vec::with_capacity(ends.len());
    for &end in ends {
        coords.push(inflate_coords(flat_coords, offset, end, stride));
        offset = end;
    }
    coords
}

/// Copy the coordinates of every sub-sub-sequence delimited by `endss`.
pub fn inflate_coords3(
    flat_coords: &[f64],
    mut offset: usize,
    endss: &[Vec<usize>],
    stride: usize,
) -> Vec<Vec<Vec<Coord>>> {
    let mut coords = Vec::with_capacity(endss.len());
    for ends in endss {
        coords.push(inflate_coords2(flat_coords, offset, ends, stride));
        offset = last_end(ends, offset);
    }
    coords
}

/// Borrow each coordinate of `flat_coords` in turn, without copying.
///
/// A zero stride yields nothing.
pub fn iter_coords(flat_coords: &[f64], stride: usize) -> std::slice::ChunksExact<'_, f64> {
    match stride {
        0 => flat_coords[..0].chunks_exact(1),
        stride => flat_coords.chunks_exact(stride),
    }
}

/// Reverse the order of the coordinates in `flat_coords[offset..end]` in place.
pub fn reverse_coords(flat_coords: &mut [f64], offset: usize, end: usize, stride: usize) {
    if stride == 0 || end <= offset {
        return;
    }
    let n = (end - offset) / stride;
    for i in 0..n / 2 {
        let a = offset + i * stride;
        let b = offset + (n - 1 - i) * stride;
        for k in 0..stride {
            flat_coords.swap(a + k, b + k);
        }
    }
}

/// Reverse each sub-sequence delimited by `ends` in place, keeping `ends` as they are.
pub fn reverse_coords2(flat_coords: &mut [f64], mut offset: usize, ends: &[usize], stride: usize) {
    for &end in ends {
        reverse_coords(flat_coords, offset, end, stride);
        offset = end;
    }
}

/// Reverse each leaf sub-sequence delimited by `endss` in place.
pub fn reverse_coords3(
    flat_coords: &mut [f64],
    mut offset: usize,
    endss: &[Vec<usize>],
    stride: usize,
) {
    for ends in endss {
        reverse_coords2(flat_coords, offset, ends, stride);
        offset = last_end(ends, offset);
    }
}

/// Twice the signed area of the ring stored at `flat_coords[offset..end]`.
///
/// Computed as `Σ (y[i] - y[i-1]) * (x[i] + x[i-1])`, so counter-clockwise rings are
/// positive.
pub fn double_area(flat_coords: &[f64], offset: usize, end: usize, stride: usize) -> f64 {
    if stride == 0 {
        return 0.;
    }
    let mut double_area = 0.;
    let mut i = offset + stride;
    while i < end {
        double_area += (flat_coords[i + 1] - flat_coords[i + 1 - stride])
            * (flat_coords[i] + flat_coords[i - stride]);
        i += stride;
    }
    double_area
}

/// Sum of [`double_area`] over every ring delimited by `ends`.
pub fn double_area2(flat_coords: &[f64], mut offset: usize, ends: &[usize], stride: usize) -> f64 {
    let mut double_area2 = 0.;
    for &end in ends {
        double_area2 += double_area(flat_coords, offset, end, stride);
        offset = end;
    }
    double_area2
}

/// Sum of [`double_area2`] over every polygon delimited by `endss`.
pub fn double_area3(
    flat_coords: &[f64],
    mut offset: usize,
    endss: &[Vec<usize>],
    stride: usize,
) -> f64 {
    let mut double_area3 = 0.;
    for ends in endss {
        double_area3 += double_area2(flat_coords, offset, ends, stride);
        offset = last_end(ends, offset);
    }
    double_area3
}

/// The planar length of the path stored at `flat_coords[offset..end]`.
pub fn length(flat_coords: &[f64], offset: usize, end: usize, stride: usize) -> f64 {
    if stride == 0 {
        return 0.;
    }
    let mut length = 0.;
    let mut i = offset + stride;
    while i < end {
        let dx = flat_coords[i] - flat_coords[i - stride];
        let dy = flat_coords[i + 1] - flat_coords[i + 1 - stride];
        length += dx.hypot(dy);
        i += stride;
    }
    length
}

/// Sum of [`length`] over every path delimited by `ends`.
pub fn length2(flat_coords: &[f64], mut offset: usize, ends: &[usize], stride: usize) -> f64 {
    let mut length2 = 0.;
    for &end in ends {
        length2 += length(flat_coords, offset, end, stride);
        offset = end;
    }
    length2
}

/// Sum of [`length2`] over every polygon delimited by `endss`.
pub fn length3(flat_coords: &[f64], mut offset: usize, endss: &[Vec<usize>], stride: usize) -> f64 {
    let mut length3 = 0.;
    for ends in endss {
        length3 += length2(flat_coords, offset, ends, stride);
        offset = last_end(ends, offset);
    }
    length3
}

fn logged<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        debug!("rejected flat coordinates: {err}");
    }
    result
}

/// Check a point buffer: empty, or exactly one coordinate.
pub fn verify_point(layout: Layout, flat_coords: &[f64]) -> Result<()> {
    logged(verify_point_inner(layout, flat_coords))
}

fn verify_point_inner(layout: Layout, flat_coords: &[f64]) -> Result<()> {
    let stride = layout.stride();
    if stride == 0 {
        if !flat_coords.is_empty() {
            return Err(GeomError::NonEmptyFlatCoords);
        }
        return Ok(());
    }
    if !flat_coords.is_empty() && flat_coords.len() != stride {
        return Err(GeomError::LengthStrideMismatch {
            len: flat_coords.len(),
            stride,
        });
    }
    Ok(())
}

/// Check a buffer without ends: its length is a multiple of the stride.
pub fn verify_coords(layout: Layout, flat_coords: &[f64]) -> Result<()> {
    logged(verify_coords_inner(layout, flat_coords))
}

fn verify_coords_inner(layout: Layout, flat_coords: &[f64]) -> Result<()> {
    let stride = layout.stride();
    if stride == 0 {
        if !flat_coords.is_empty() {
            return Err(GeomError::NonEmptyFlatCoords);
        }
        return Ok(());
    }
    if flat_coords.len() % stride != 0 {
        return Err(GeomError::LengthStrideMismatch {
            len: flat_coords.len(),
            stride,
        });
    }
    Ok(())
}

/// Check a buffer split by one level of ends.
pub fn verify_ends(layout: Layout, flat_coords: &[f64], ends: &[usize]) -> Result<()> {
    logged(verify_ends_inner(layout, flat_coords, ends))
}

fn verify_ends_inner(layout: Layout, flat_coords: &[f64], ends: &[usize]) -> Result<()> {
    if layout.stride() == 0 {
        verify_coords_inner(layout, flat_coords)?;
        if !ends.is_empty() {
            return Err(GeomError::NonEmptyEnds);
        }
        return Ok(());
    }
    verify_coords_inner(layout, flat_coords)?;
    let offset = check_ends(ends, layout.stride(), 0)?;
    check_last_end(offset, flat_coords.len())
}

/// Check a buffer split by two levels of ends.
pub fn verify_endss(layout: Layout, flat_coords: &[f64], endss: &[Vec<usize>]) -> Result<()> {
    logged(verify_endss_inner(layout, flat_coords, endss))
}

fn verify_endss_inner(layout: Layout, flat_coords: &[f64], endss: &[Vec<usize>]) -> Result<()> {
    if layout.stride() == 0 {
        verify_coords_inner(layout, flat_coords)?;
        if !endss.is_empty() {
            return Err(GeomError::NonEmptyEndss);
        }
        return Ok(());
    }
    verify_coords_inner(layout, flat_coords)?;
    let mut offset = 0;
    for ends in endss {
        offset = check_ends(ends, layout.stride(), offset)?;
    }
    check_last_end(offset, flat_coords.len())
}

/// Check a multi point buffer: valid ends where each element is empty or one coordinate.
pub fn verify_point_ends(layout: Layout, flat_coords: &[f64], ends: &[usize]) -> Result<()> {
    logged(verify_point_ends_inner(layout, flat_coords, ends))
}

fn verify_point_ends_inner(layout: Layout, flat_coords: &[f64], ends: &[usize]) -> Result<()> {
    verify_ends_inner(layout, flat_coords, ends)?;
    let stride = layout.stride();
    let mut previous = 0;
    for (index, &end) in ends.iter().enumerate() {
        let len = end - previous;
        if len != 0 && len != stride {
            return Err(GeomError::InvalidPointEnd { index });
        }
        previous = end;
    }
    Ok(())
}

fn check_ends(ends: &[usize], stride: usize, mut offset: usize) -> Result<usize> {
    for &end in ends {
        if end % stride != 0 {
            return Err(GeomError::MisalignedEnd { end, stride });
        }
        if end < offset {
            return Err(GeomError::OutOfOrderEnd {
                end,
                previous: offset,
            });
        }
        offset = end;
    }
    Ok(offset)
}

fn check_last_end(end: usize, len: usize) -> Result<()> {
    if end != len {
        return Err(GeomError::IncorrectEnd { end, len });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::{
        LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    };
    use crate::trait_::FlatGeometry;

    const LAYOUTS: [Layout; 5] = [
        Layout::NoLayout,
        Layout::XY,
        Layout::XYZ,
        Layout::XYM,
        Layout::XYZM,
    ];

    /// One step applied to every nested geometry kind: push a member or replace the coords.
    #[derive(Debug, Clone)]
    struct Edit {
        set: bool,
        sizes: Vec<usize>,
        other_layout: bool,
    }

    fn edits() -> impl Strategy<Value = Vec<Edit>> {
        prop::collection::vec(
            (any::<bool>(), prop::collection::vec(0usize..4, 0..4), prop::bool::weighted(0.2))
                .prop_map(|(set, sizes, other_layout)| Edit {
                    set,
                    sizes,
                    other_layout,
                }),
            1..12,
        )
    }

    /// `n` coordinates of `stride` values each.
    fn coords(n: usize, stride: usize) -> Vec<Vec<f64>> {
        (0..n).map(|i| vec![i as f64; stride]).collect()
    }

    fn apply<G>(
        geom: &mut G,
        edit: impl FnOnce(&mut G) -> Result<()>,
    ) -> std::result::Result<(), TestCaseError>
    where
        G: FlatGeometry + Clone + PartialEq + std::fmt::Debug,
    {
        let before = geom.clone();
        if edit(geom).is_err() {
            prop_assert_eq!(&*geom, &before);
        }
        prop_assert!(geom.verify().is_ok(), "invalid after edit: {:?}", geom);
        Ok(())
    }

    #[test]
    fn deflate_stride_mismatch() {
        let err = deflate_coords(&[vec![1., 2.], vec![]], 2).unwrap_err();
        assert_eq!(err, GeomError::StrideMismatch { got: 0, want: 2 });

        let err = deflate_coords(&[vec![1.]], 2).unwrap_err();
        assert_eq!(err, GeomError::StrideMismatch { got: 1, want: 2 });

        let err = deflate_coords(&[vec![3., 4., 5.]], 2).unwrap_err();
        assert_eq!(err, GeomError::StrideMismatch { got: 3, want: 2 });
        assert_eq!(err.to_string(), "stride mismatch: got 3, want 2");
    }

    #[test]
    fn deflate_nested() {
        let (flat, ends) =
            deflate_coords2(&[vec![[0., 0.], [1., 1.]], vec![], vec![[2., 2.]]], 2).unwrap();
        assert_eq!(flat, vec![0., 0., 1., 1., 2., 2.]);
        assert_eq!(ends, vec![4, 4, 6]);

        let (flat, endss) = deflate_coords3(
            &[
                vec![vec![[0., 0.], [1., 0.], [0., 1.], [0., 0.]]],
                vec![],
                vec![vec![[5., 5.]]],
            ],
            2,
        )
        .unwrap();
        assert_eq!(flat.len(), 10);
        assert_eq!(endss, vec![vec![8], vec![], vec![10]]);
    }

    #[test]
    fn inflate_skips_empty_polygons() {
        let flat = [0., 0., 1., 1., 2., 2.];
        let endss = vec![vec![4], vec![], vec![6]];
        let coords = inflate_coords3(&flat, 0, &endss, 2);
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0].len(), 1);
        assert_eq!(coords[0][0], vec![Coord::from([0., 0.]), Coord::from([1., 1.])]);
        assert!(coords[1].is_empty());
        assert_eq!(coords[2].len(), 1);
        assert_eq!(coords[2][0], vec![Coord::from([2., 2.])]);
    }

    #[test]
    fn reverse_keeps_ends() {
        let mut flat = vec![1., 2., 10., 3., 4., 20., 5., 6., 30., 7., 8., 40.];
        let ends = vec![9, 12];
        reverse_coords2(&mut flat, 0, &ends, 3);
        assert_eq!(
            flat,
            vec![5., 6., 30., 3., 4., 20., 1., 2., 10., 7., 8., 40.]
        );
    }

    #[test]
    fn reverse_three_levels() {
        let mut flat = vec![0., 0., 1., 1., 2., 2., 3., 3.];
        let endss = vec![vec![4], vec![], vec![8]];
        reverse_coords3(&mut flat, 0, &endss, 2);
        assert_eq!(flat, vec![1., 1., 0., 0., 3., 3., 2., 2.]);
    }

    #[test]
    fn double_area_sign() {
        let ring = [10., 10., 20., 10., 30., 30., 10., 30., 10., 10.];
        assert_relative_eq!(double_area(&ring, 0, ring.len(), 2), 600.);

        let mut reversed = ring;
        reverse_coords(&mut reversed, 0, ring.len(), 2);
        assert_relative_eq!(double_area(&reversed, 0, ring.len(), 2), -600.);
    }

    #[test]
    fn degenerate_accumulators_are_zero() {
        assert_eq!(double_area(&[], 0, 0, 0), 0.);
        assert_eq!(length(&[], 0, 0, 0), 0.);
        assert_eq!(double_area2(&[], 0, &[], 2), 0.);
        assert_eq!(length3(&[], 0, &[vec![]], 2), 0.);
        assert_eq!(length(&[1., 1.], 0, 2, 2), 0.);
        assert_eq!(iter_coords(&[], 0).count(), 0);
    }

    #[test]
    fn iter_coords_borrows() {
        let flat = [1., 2., 3., 4., 5., 6.];
        let coords: Vec<&[f64]> = iter_coords(&flat, 3).collect();
        assert_eq!(coords, vec![&flat[..3], &flat[3..]]);
    }

    #[test]
    fn nested_area_and_length() {
        // 4x4 square with a 2x2 hole wound the other way
        let flat = [
            0., 0., 0., 4., 4., 4., 4., 0., 0., 0., 1., 1., 3., 1., 3., 3., 1., 3., 1., 1.,
        ];
        let ends = vec![10, 20];
        assert_relative_eq!(double_area2(&flat, 0, &ends, 2), -24.);
        assert_relative_eq!(length2(&flat, 0, &ends, 2), 24.);

        let endss = vec![ends.clone(), vec![]];
        assert_relative_eq!(double_area3(&flat, 0, &endss, 2), -24.);
        assert_relative_eq!(length3(&flat, 0, &endss, 2), 24.);
    }

    #[test]
    fn verify_errors() {
        assert_eq!(
            verify_coords(Layout::NoLayout, &[1.]),
            Err(GeomError::NonEmptyFlatCoords)
        );
        assert_eq!(
            verify_ends(Layout::NoLayout, &[], &[0]),
            Err(GeomError::NonEmptyEnds)
        );
        assert_eq!(
            verify_endss(Layout::NoLayout, &[], &[vec![]]),
            Err(GeomError::NonEmptyEndss)
        );
        assert_eq!(
            verify_coords(Layout::XY, &[1., 2., 3.]),
            Err(GeomError::LengthStrideMismatch { len: 3, stride: 2 })
        );
        assert_eq!(
            verify_ends(Layout::XY, &[1., 2., 3., 4.], &[3]),
            Err(GeomError::MisalignedEnd { end: 3, stride: 2 })
        );
        assert_eq!(
            verify_ends(Layout::XY, &[1., 2., 3., 4.], &[4, 2]),
            Err(GeomError::OutOfOrderEnd {
                end: 2,
                previous: 4
            })
        );
        assert_eq!(
            verify_ends(Layout::XY, &[1., 2., 3., 4.], &[2]),
            Err(GeomError::IncorrectEnd { end: 2, len: 4 })
        );
        assert_eq!(
            verify_endss(Layout::XY, &[1., 2., 3., 4.], &[vec![4], vec![2]]),
            Err(GeomError::OutOfOrderEnd {
                end: 2,
                previous: 4
            })
        );
        assert_eq!(
            verify_point_ends(Layout::XY, &[1., 2., 3., 4.], &[0, 4]),
            Err(GeomError::InvalidPointEnd { index: 1 })
        );
    }

    #[test]
    fn verify_accepts_valid() {
        verify_point(Layout::XYZ, &[]).unwrap();
        verify_point(Layout::XYZ, &[1., 2., 3.]).unwrap();
        verify_ends(Layout::XY, &[1., 2., 3., 4.], &[0, 2, 2, 4]).unwrap();
        verify_endss(Layout::XY, &[1., 2., 3., 4.], &[vec![], vec![2, 4], vec![]]).unwrap();
        verify_point_ends(Layout::XY, &[1., 2., 3., 4.], &[0, 2, 2, 4]).unwrap();
    }

    proptest! {
        #[test]
        fn deflate_inflate_round_trip(
            lines in prop::collection::vec(
                prop::collection::vec(prop::collection::vec(-1e6f64..1e6, 3), 0..8),
                0..6,
            )
        ) {
            let (flat, ends) = deflate_coords2(&lines, 3).unwrap();
            verify_ends(Layout::XYZ, &flat, &ends).unwrap();
            let inflated = inflate_coords2(&flat, 0, &ends, 3);
            let inflated: Vec<Vec<Vec<f64>>> = inflated
                .into_iter()
                .map(|line| line.into_iter().map(Coord::into_inner).collect())
                .collect();
            prop_assert_eq!(inflated, lines);
        }

        #[test]
        fn edits_keep_geometries_valid(layout_index in 0usize..5, steps in edits()) {
            let layout = LAYOUTS[layout_index];
            let mut polygon = Polygon::new(layout);
            let mut multi_point = MultiPoint::new(layout);
            let mut multi_line_string = MultiLineString::new(layout);
            let mut multi_polygon = MultiPolygon::new(layout);

            for edit in steps {
                // A wrong stride on set, a wrong layout on push.
                let member_layout = if edit.other_layout {
                    LAYOUTS[(layout_index + 1) % LAYOUTS.len()]
                } else {
                    layout
                };
                let stride = layout.stride() + usize::from(edit.other_layout);
                let member_stride = member_layout.stride();
                let lines: Vec<_> = edit.sizes.iter().map(|&n| coords(n, stride)).collect();
                let points: Vec<Option<Vec<f64>>> = edit
                    .sizes
                    .iter()
                    .map(|&n| (n > 0).then(|| vec![n as f64; stride]))
                    .collect();
                let polygons: Vec<_> = edit
                    .sizes
                    .iter()
                    .map(|&n| (0..n).map(|i| coords(i + 1, stride)).collect::<Vec<_>>())
                    .collect();
                let n = edit.sizes.first().copied().unwrap_or(0);

                if edit.set {
                    apply(&mut polygon, |g| g.try_set_coords(&lines).map(|_| ()))?;
                    apply(&mut multi_point, |g| g.try_set_coords(&points).map(|_| ()))?;
                    apply(&mut multi_line_string, |g| g.try_set_coords(&lines).map(|_| ()))?;
                    apply(&mut multi_polygon, |g| g.try_set_coords(&polygons).map(|_| ()))?;
                } else {
                    let ring = LinearRing::from_coords(member_layout, &coords(n, member_stride));
                    apply(&mut polygon, |g| g.try_push(&ring))?;

                    let point = if n > 0 {
                        Point::from_coords(member_layout, &vec![1.; member_stride])
                    } else {
                        Point::new(member_layout)
                    };
                    apply(&mut multi_point, |g| g.try_push(&point))?;

                    let line = LineString::from_coords(member_layout, &coords(n, member_stride));
                    apply(&mut multi_line_string, |g| g.try_push(&line))?;

                    // A polygon without layout can only be built with no rings.
                    let rings: Vec<_> = (0..n).map(|i| coords(i + 1, member_stride)).collect();
                    if let Ok(member) = Polygon::try_from_coords(member_layout, &rings) {
                        apply(&mut multi_polygon, |g| g.try_push(&member))?;
                    }
                }
            }
        }
    }
}
