use ov_contour::Polygon;
use ov_core::Point;

use crate::SvgError;

/// Parses `M<x>,<y>`, `h<dx>`, `v<dy>` and `z` commands back into closed
/// lattice loops, one per move-to. Whitespace between tokens is ignored.
pub fn parse_path_data(d: &str) -> Result<Vec<Polygon>, SvgError> {
    let mut cursor = Cursor { src: d, pos: 0 };
    let mut loops: Vec<Polygon> = Vec::new();
    let mut open: Option<Vec<Point>> = None;

    while let Some((offset, cmd)) = cursor.next_command() {
        match cmd {
            'M' => {
                if let Some(points) = open.take() {
                    loops.push(Polygon::new(points));
                }
                let x = cursor.number()?;
                cursor.expect_comma()?;
                let y = cursor.number()?;
                open = Some(vec![Point::new(x, y)]);
            }
            'h' | 'v' => {
                let delta = cursor.number()?;
                let points = open.as_mut().ok_or(SvgError::MissingMoveTo { offset })?;
                let last = points[points.len() - 1];
                points.push(if cmd == 'h' {
                    Point::new(last.x + delta, last.y)
                } else {
                    Point::new(last.x, last.y + delta)
                });
            }
            'z' | 'Z' => {
                let points = open.take().ok_or(SvgError::MissingMoveTo { offset })?;
                loops.push(Polygon::new(points));
            }
            found => return Err(SvgError::UnexpectedCommand { found, offset }),
        }
    }

    if let Some(points) = open {
        loops.push(Polygon::new(points));
    }

    Ok(loops)
}

/// Total signed area enclosed by the path data (holes count negative).
pub fn path_data_area(d: &str) -> Result<i64, SvgError> {
    let loops = parse_path_data(d)?;
    Ok(loops.iter().map(Polygon::signed_area2).sum::<i64>() / 2)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn skip_ws(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn next_command(&mut self) -> Option<(usize, char)> {
        self.skip_ws();
        let c = self.src[self.pos..].chars().next()?;
        let offset = self.pos;
        self.pos += c.len_utf8();
        Some((offset, c))
    }

    fn expect_comma(&mut self) -> Result<(), SvgError> {
        self.skip_ws();
        match self.src[self.pos..].chars().next() {
            Some(',') => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(SvgError::UnexpectedCommand {
                found,
                offset: self.pos,
            }),
            None => Err(SvgError::InvalidNumber { offset: self.pos }),
        }
    }

    fn number(&mut self) -> Result<i64, SvgError> {
        self.skip_ws();
        let start = self.pos;
        let bytes = self.src.as_bytes();
        let mut end = start;
        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }

        let value = self.src[start..end]
            .parse::<i64>()
            .map_err(|_| SvgError::InvalidNumber { offset: start })?;
        self.pos = end;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use ov_core::Point;

    use super::{parse_path_data, path_data_area};
    use crate::SvgError;

    #[test]
    fn parses_multiple_loops() {
        let loops = parse_path_data("M0,0h3v3h-3zM1,1v1h1v-1z").expect("valid");
        assert_eq!(loops.len(), 2);
        assert_eq!(
            loops[1].points,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(2, 1)
            ]
        );
        assert_eq!(path_data_area("M0,0h3v3h-3zM1,1v1h1v-1z").expect("valid"), 8);
    }

    #[test]
    fn tolerates_whitespace_and_negative_moves() {
        let loops = parse_path_data(" M -2 , 5 h 4 v -1 h -4 z ").expect("valid");
        assert_eq!(loops[0].points[0], Point::new(-2, 5));
        assert_eq!(loops[0].signed_area(), -4);
    }

    #[test]
    fn rejects_malformed_data() {
        assert_eq!(
            parse_path_data("h1").unwrap_err(),
            SvgError::MissingMoveTo { offset: 0 }
        );
        assert_eq!(
            parse_path_data("M0,0L1,1").unwrap_err(),
            SvgError::UnexpectedCommand {
                found: 'L',
                offset: 4
            }
        );
        assert_eq!(
            parse_path_data("M0,0h-z").unwrap_err(),
            SvgError::InvalidNumber { offset: 5 }
        );
        assert!(matches!(
            parse_path_data("M3 4").unwrap_err(),
            SvgError::UnexpectedCommand { found: '4', .. }
        ));
    }
}
