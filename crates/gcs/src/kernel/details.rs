//! Multi-line diagnostic blocks for points and vectors.
//!
//! Written to any `fmt::Write` sink so callers choose where text goes
//! (a `String`, a formatter, a log line).

use std::fmt;

use super::point::Point;
use super::vector::Vector;
use crate::scalar::{deg, Real};

const BANNER: &str = "===============================";
const RULE: &str = "-------------------------------";

pub trait Details {
    fn write_details<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    fn details(&self) -> String {
        let mut s = String::new();
        self.write_details(&mut s).expect("writing details into a String");
        s
    }
}

impl<const N: usize, F: Real> Details for Point<N, F> {
    fn write_details<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{self}")?;
        writeln!(out, "{BANNER}")
    }
}

/// Includes the magnitude and the angle (degrees) to each unit axis.
impl<const N: usize, F: Real> Details for Vector<N, F> {
    fn write_details<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "V = {self}")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Magnitude:      {}", self.magnitude())?;
        for i in 0..N {
            let angle = Vector::axis(i).and_then(|e| self.angle(&e));
            match angle {
                Ok(a) => writeln!(out, "Angle (axis {i}): {}°", deg(a))?,
                Err(_) => writeln!(out, "Angle (axis {i}): undefined")?,
            }
        }
        writeln!(out, "{BANNER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_block() {
        let p = Point::new([1.5, -2.0]);
        assert_eq!(
            p.details(),
            format!("{BANNER}\n{{1.5, -2}}\n{BANNER}\n")
        );
    }

    #[test]
    fn vector_block_lists_axis_angles() {
        let v = Vector::new([0.0, 2.0]);
        let text = v.details();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[1], "V = [0, 2]");
        assert_eq!(lines[2], RULE);
        assert_eq!(lines[3], "Magnitude:      2");
        let axis0 = lines[4]
            .strip_prefix("Angle (axis 0): ")
            .and_then(|s| s.strip_suffix('°'))
            .unwrap();
        assert!((axis0.parse::<f64>().unwrap() - 90.0).abs() < 1e-9);
        assert_eq!(lines[5], "Angle (axis 1): 0°");
        assert_eq!(lines[6], BANNER);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn zero_vector_angles_are_undefined() {
        let v: Vector<3> = Vector::zero();
        let text = v.details();
        assert_eq!(text.matches("undefined").count(), 3);
    }
}
