//! Reading and generating point sets.
//!
//! The text format is a point count on the first line followed by one
//! `x,y` pair per line:
//!
//! ```text
//! 3
//! 0.0, 0.0
//! 2.5, 0.0
//! 1.0, 4.0
//! ```
use rand::Rng;
use std::io::BufRead;
use std::ops::Range;

use crate::data::Point;
use crate::Error;

/// Read a count-prefixed point list.
///
/// An empty input yields no points. If the input ends before `n` points were
/// read, the points read so far are returned. Coordinates are not checked for
/// finiteness here; the hull algorithms reject NaN and infinities.
///
/// # Errors
/// * [`Error::Parse`] if the count or a coordinate pair is malformed.
/// * [`Error::Io`] if the reader fails.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point<f64>>, Error> {
  let mut lines = reader.lines();
  let count = match lines.next() {
    None => return Ok(Vec::new()),
    Some(line) => line?
      .trim()
      .parse::<usize>()
      .map_err(|_| Error::Parse { line: 1 })?,
  };
  // The count is untrusted.
  let mut points = Vec::with_capacity(count.min(4096));
  for (i, line) in lines.take(count).enumerate() {
    let line_no = i + 2;
    let line = line?;
    points.push(parse_point(&line).ok_or(Error::Parse { line: line_no })?);
  }
  Ok(points)
}

/// [`read_points`] on a string.
///
/// # Examples
///
/// ```rust
/// # use rhull::io::parse_points;
/// # use rhull::data::Point;
/// # use rhull::Error;
/// let pts = parse_points("2\n1,2\n -3.5 , 4e1 \n").unwrap();
/// assert_eq!(pts, vec![Point::new([1., 2.]), Point::new([-3.5, 40.])]);
/// assert_eq!(parse_points("2\n1,2\n3\n"), Err(Error::Parse { line: 3 }));
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Point<f64>>, Error> {
  read_points(input.as_bytes())
}

// Extra fields after the second are ignored.
fn parse_point(line: &str) -> Option<Point<f64>> {
  let mut fields = line.split(',');
  let x = fields.next()?.trim().parse().ok()?;
  let y = fields.next()?.trim().parse().ok()?;
  Some(Point::new([x, y]))
}

/// `n` points drawn uniformly from the rectangle `x` × `y`.
///
/// Empty ranges are allowed and pin the coordinate to the range start.
pub fn uniform_points<R>(n: usize, x: Range<f64>, y: Range<f64>, rng: &mut R) -> Vec<Point<f64>>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| {
      let px = x.start + rng.gen::<f64>() * (x.end - x.start);
      let py = y.start + rng.gen::<f64>() * (y.end - y.start);
      Point::new([px, py])
    })
    .collect()
}
