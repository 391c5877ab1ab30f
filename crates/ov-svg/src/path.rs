use ov_contour::Polygon;
use ov_core::{Axis, ColorKey, Point};

use crate::SvgError;

/// Appends the path data of `polygons` to `out`.
///
/// Every segment, including the implicit one from the last point back to
/// the first, must be axis-aligned. On error `out` may hold a partial path
/// and should be discarded.
pub fn write_path_data(polygons: &[Polygon], out: &mut String) -> Result<(), SvgError> {
    for polygon in polygons {
        let Some((first, rest)) = polygon.points.split_first() else {
            continue;
        };

        out.push('M');
        out.push_str(&first.x.to_string());
        out.push(',');
        out.push_str(&first.y.to_string());

        let mut prev = *first;
        for &p in rest {
            push_step(out, prev, p)?;
            prev = p;
        }
        if prev.axis_to(*first).is_none() {
            return Err(SvgError::NonOrthogonalSegment {
                from: prev,
                to: *first,
            });
        }
        out.push('z');
    }

    Ok(())
}

fn push_step(out: &mut String, from: Point, to: Point) -> Result<(), SvgError> {
    let (cmd, delta) = match from.axis_to(to) {
        Some(Axis::Vertical) => ('v', to.y - from.y),
        Some(Axis::Horizontal) => ('h', to.x - from.x),
        None => return Err(SvgError::NonOrthogonalSegment { from, to }),
    };
    out.push(cmd);
    out.push_str(&delta.to_string());
    Ok(())
}

pub fn path_data(polygons: &[Polygon]) -> Result<String, SvgError> {
    let mut d = String::new();
    write_path_data(polygons, &mut d)?;
    Ok(d)
}

/// One `<path>` element filling `polygons` with `color`.
pub fn path_element(color: ColorKey, polygons: &[Polygon]) -> Result<String, SvgError> {
    let d = path_data(polygons)?;
    Ok(format!(r#"<path stroke="none" fill="{color}" d="{d}"/>"#))
}

#[cfg(test)]
mod tests {
    use ov_contour::Polygon;
    use ov_core::{ColorKey, Point, Rgba};

    use super::{path_data, path_element};
    use crate::SvgError;

    fn poly(pts: &[(i64, i64)]) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn unit_square_path() {
        let d = path_data(&[poly(&[(0, 0), (1, 0), (1, 1), (0, 1)])]).expect("orthogonal");
        assert_eq!(d, "M0,0h1v1h-1z");
    }

    #[test]
    fn multiple_polygons_share_one_path() {
        let outer = poly(&[(0, 0), (3, 0), (3, 3), (0, 3)]);
        let hole = poly(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        let d = path_data(&[outer, hole]).expect("orthogonal");
        assert_eq!(d, "M0,0h3v3h-3zM1,1v1h1v-1z");
    }

    #[test]
    fn element_carries_fill_and_no_stroke() {
        let red = ColorKey::from(Rgba::opaque(255, 0, 0));
        let el = path_element(red, &[poly(&[(1, 0), (2, 0), (2, 1), (1, 1)])]).expect("ok");
        assert_eq!(el, r##"<path stroke="none" fill="#ff0000ff" d="M1,0h1v1h-1z"/>"##);
    }

    #[test]
    fn negative_and_large_coordinates() {
        let d = path_data(&[poly(&[(-5, 10), (120, 10), (120, -3), (-5, -3)])]).expect("ok");
        assert_eq!(d, "M-5,10h125v-13h-125z");
    }

    #[test]
    fn diagonal_segment_fails_fast() {
        let err = path_data(&[poly(&[(0, 0), (1, 0), (2, 2), (0, 1)])]).unwrap_err();
        assert_eq!(
            err,
            SvgError::NonOrthogonalSegment {
                from: Point::new(1, 0),
                to: Point::new(2, 2)
            }
        );

        let repeated = path_data(&[poly(&[(0, 0), (0, 0), (1, 0)])]).unwrap_err();
        assert!(matches!(repeated, SvgError::NonOrthogonalSegment { .. }));
    }

    #[test]
    fn diagonal_closing_segment_fails_fast() {
        let err = path_data(&[poly(&[(0, 0), (2, 0), (2, 2)])]).unwrap_err();
        assert_eq!(
            err,
            SvgError::NonOrthogonalSegment {
                from: Point::new(2, 2),
                to: Point::new(0, 0)
            }
        );

        let single = path_data(&[poly(&[(3, 4)])]).unwrap_err();
        assert!(matches!(single, SvgError::NonOrthogonalSegment { .. }));
    }

    #[test]
    fn empty_polygons_emit_nothing() {
        assert_eq!(path_data(&[]).expect("ok"), "");
        assert_eq!(path_data(&[Polygon::default()]).expect("ok"), "");
    }
}
