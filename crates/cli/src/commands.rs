//! Subcommand bodies. Each returns an `Outcome` carrying both output forms.

use anyhow::{anyhow, Result};
use gcs::sample::{draw_cloud, Bounds};
use gcs::{deg, Details, GeomError, Point, Vector};
use serde::Serialize;
use serde_json::{json, Value};

use crate::coords::{common_dim, dispatch_dim, Coords};

#[derive(Debug)]
pub struct Outcome {
    pub text: String,
    pub json: Value,
}

pub fn distance(from: &Coords, to: &Coords) -> Result<Outcome> {
    let dim = common_dim(&[from, to])?;
    dispatch_dim!(dim, distance_n(from, to))
}

fn distance_n<const N: usize>(from: &Coords, to: &Coords) -> Result<Outcome> {
    let p = Point::<N, f64>::from_slice(from.as_slice())?;
    let q = Point::<N, f64>::from_slice(to.as_slice())?;
    let d = p.distance(&q);
    tracing::debug!(dim = N, %p, %q, d, "distance");
    Ok(Outcome {
        text: format!("{d}"),
        json: json!({ "from": p.as_array().as_slice(), "to": q.as_array().as_slice(), "distance": d }),
    })
}

pub fn vector(from: &Coords, to: &Coords) -> Result<Outcome> {
    let dim = common_dim(&[from, to])?;
    dispatch_dim!(dim, vector_n(from, to))
}

fn vector_n<const N: usize>(from: &Coords, to: &Coords) -> Result<Outcome> {
    let src = Point::<N, f64>::from_slice(from.as_slice())?;
    let dst = Point::<N, f64>::from_slice(to.as_slice())?;
    let v = Vector::between(&src, &dst);
    let m = v.magnitude();
    tracing::debug!(dim = N, %src, %dst, %v, "vector");
    Ok(Outcome {
        text: format!("{v}\nmagnitude {m}"),
        json: json!({ "components": v.as_array().as_slice(), "magnitude": m }),
    })
}

pub fn dot(u: &Coords, v: &Coords) -> Result<Outcome> {
    let dim = common_dim(&[u, v])?;
    dispatch_dim!(dim, dot_n(u, v))
}

fn dot_n<const N: usize>(u: &Coords, v: &Coords) -> Result<Outcome> {
    let a = Vector::<N, f64>::from_slice(u.as_slice())?;
    let b = Vector::<N, f64>::from_slice(v.as_slice())?;
    let d = a.dot_product(&b);
    Ok(Outcome {
        text: format!("{d}"),
        json: json!({ "dot_product": d }),
    })
}

pub fn angle(u: &Coords, v: &Coords, degrees: bool) -> Result<Outcome> {
    let dim = common_dim(&[u, v])?;
    dispatch_dim!(dim, angle_n(u, v, degrees))
}

fn angle_n<const N: usize>(u: &Coords, v: &Coords, degrees: bool) -> Result<Outcome> {
    let a = Vector::<N, f64>::from_slice(u.as_slice())?;
    let b = Vector::<N, f64>::from_slice(v.as_slice())?;
    let radians = a.angle(&b)?;
    let value = if degrees { deg(radians) } else { radians };
    let unit = if degrees { "degrees" } else { "radians" };
    tracing::debug!(dim = N, %a, %b, radians, "angle");
    Ok(Outcome {
        text: format!("{value}"),
        json: json!({ "angle": value, "unit": unit }),
    })
}

/// Three dimensions only; anything else is a dimension mismatch against 3.
pub fn cross(u: &Coords, v: &Coords) -> Result<Outcome> {
    for c in [u, v] {
        if c.dim() != 3 {
            return Err(GeomError::DimensionMismatch {
                expected: 3,
                found: c.dim(),
            }
            .into());
        }
    }
    let a = Vector::<3, f64>::from_slice(u.as_slice())?;
    let b = Vector::<3, f64>::from_slice(v.as_slice())?;
    let w = a.cross_product(&b);
    Ok(Outcome {
        text: format!("{w}"),
        json: json!({ "cross_product": w.as_array().as_slice() }),
    })
}

pub fn translate(point: &Coords, by: &Coords, reverse: bool) -> Result<Outcome> {
    let dim = common_dim(&[point, by])?;
    dispatch_dim!(dim, translate_n(point, by, reverse))
}

fn translate_n<const N: usize>(point: &Coords, by: &Coords, reverse: bool) -> Result<Outcome> {
    let p = Point::<N, f64>::from_slice(point.as_slice())?;
    let v = Vector::<N, f64>::from_slice(by.as_slice())?;
    let out = if reverse {
        Vector::srcpoint(&p, &v)
    } else {
        Vector::endpoint(&p, &v)
    };
    Ok(Outcome {
        text: format!("{out}"),
        json: json!({ "point": out.as_array().as_slice() }),
    })
}

pub fn details_point(coords: &Coords) -> Result<Outcome> {
    dispatch_dim!(coords.dim(), details_point_n(coords))
}

fn details_point_n<const N: usize>(coords: &Coords) -> Result<Outcome> {
    let p = Point::<N, f64>::from_slice(coords.as_slice())?;
    let text = p.details();
    Ok(Outcome {
        json: json!({ "point": p.as_array().as_slice(), "details": text }),
        text,
    })
}

pub fn details_vector(coords: &Coords) -> Result<Outcome> {
    dispatch_dim!(coords.dim(), details_vector_n(coords))
}

fn details_vector_n<const N: usize>(coords: &Coords) -> Result<Outcome> {
    let v = Vector::<N, f64>::from_slice(coords.as_slice())?;
    let text = v.details();
    Ok(Outcome {
        json: json!({
            "vector": v.as_array().as_slice(),
            "magnitude": v.magnitude(),
            "details": text,
        }),
        text,
    })
}

pub fn sample(dim: usize, count: usize, seed: u64, lo: f64, hi: f64) -> Result<Outcome> {
    let bounds = Bounds::new(lo, hi).ok_or_else(|| anyhow!("invalid bounds [{lo}, {hi})"))?;
    tracing::info!(dim, count, seed, lo, hi, "sample");
    dispatch_dim!(dim, sample_n(bounds, seed, count))
}

fn sample_n<const N: usize>(bounds: Bounds, seed: u64, count: usize) -> Result<Outcome> {
    let cloud = draw_cloud::<N>(bounds, seed, count);
    let text = cloud
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let points: Vec<&[f64]> = cloud.iter().map(|p| p.as_array().as_slice()).collect();
    Ok(Outcome {
        json: json!({ "seed": seed, "points": points }),
        text,
    })
}

#[derive(Serialize)]
struct Report {
    name: &'static str,
    version: &'static str,
    code_rev: &'static str,
}

pub fn report() -> Result<Outcome> {
    let report = Report {
        name: "gcs",
        version: gcs::VERSION,
        code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown"),
    };
    let json = serde_json::to_value(&report)?;
    Ok(Outcome {
        text: serde_json::to_string_pretty(&json)?,
        json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::parse_coords;

    fn c(s: &str) -> Coords {
        parse_coords(s).unwrap()
    }

    #[test]
    fn distance_dispatches_on_dimension() {
        let out = distance(&c("0,0"), &c("3,4")).unwrap();
        assert_eq!(out.text, "5");
        assert_eq!(out.json["distance"], 5.0);
        let out = distance(&c("{0,0,0,0}"), &c("{1,1,1,1}")).unwrap();
        assert_eq!(out.json["distance"], 2.0);
    }

    #[test]
    fn operands_must_agree_on_dimension() {
        let err = distance(&c("0,0"), &c("1,2,3")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeomError>(),
            Some(&GeomError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(dot(&c("1,2,3,4,5"), &c("1,2,3,4,5")).is_err());
    }

    #[test]
    fn vector_between_points() {
        let out = vector(&c("3,2,1"), &c("9,8,7")).unwrap();
        assert_eq!(out.json["components"], json!([6.0, 6.0, 6.0]));
        assert!(out.text.starts_with("[6, 6, 6]"));
    }

    #[test]
    fn angle_in_degrees_and_zero_vector() {
        let out = angle(&c("1,0"), &c("0,1"), true).unwrap();
        let a = out.json["angle"].as_f64().unwrap();
        assert!((a - 90.0).abs() < 1e-9);
        assert_eq!(out.json["unit"], "degrees");
        let err = angle(&c("0,0"), &c("0,1"), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeomError>(),
            Some(GeomError::Domain { .. })
        ));
    }

    #[test]
    fn extreme_inputs_stay_finite() {
        let out = distance(&c("1e200,0"), &c("-1e200,0")).unwrap();
        let d = out.json["distance"].as_f64().unwrap();
        assert!((d / 2e200 - 1.0).abs() < 1e-12);

        let out = angle(&c("1e200,0"), &c("1e200,1e200"), true).unwrap();
        let a = out.json["angle"].as_f64().unwrap();
        assert!((a - 45.0).abs() < 1e-9);
    }

    #[test]
    fn cross_requires_three_dimensions() {
        let out = cross(&c("1,0,0"), &c("0,1,0")).unwrap();
        assert_eq!(out.text, "[0, 0, 1]");
        let err = cross(&c("1,0"), &c("0,1")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeomError>(),
            Some(&GeomError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn translate_forward_and_back() {
        let fwd = translate(&c("1,1"), &c("2,-1"), false).unwrap();
        assert_eq!(fwd.text, "{3, 0}");
        let back = translate(&c("3,0"), &c("2,-1"), true).unwrap();
        assert_eq!(back.text, "{1, 1}");
    }

    #[test]
    fn details_and_sample() {
        let out = details_vector(&c("[0,2]")).unwrap();
        assert!(out.text.contains("Magnitude:      2"));
        let out = details_point(&c("{1,2,3}")).unwrap();
        assert!(out.text.contains("{1, 2, 3}"));

        let a = sample(3, 4, 9, -1.0, 1.0).unwrap();
        let b = sample(3, 4, 9, -1.0, 1.0).unwrap();
        assert_eq!(a.text, b.text);
        assert_eq!(a.json["points"].as_array().unwrap().len(), 4);
        assert!(sample(3, 4, 9, 1.0, -1.0).is_err());
        assert!(sample(7, 4, 9, -1.0, 1.0).is_err());
    }

    #[test]
    fn report_has_version() {
        let out = report().unwrap();
        assert_eq!(out.json["version"], gcs::VERSION);
    }
}
