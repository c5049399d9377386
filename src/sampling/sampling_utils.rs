// the collection of utility functions shared by the samplers
use crate::polynomial::poly_error::PolyError;

/// (x, y) pair of a plotted curve
pub type Point = (f64, f64);

/// plotting interval [x_min, x_max], x_max > x_min
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
}

impl Domain {
    pub fn new(x_min: f64, x_max: f64) -> Result<Self, PolyError> {
        if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
            return Err(PolyError::InvalidDomain { x_min, x_max });
        }
        Ok(Domain { x_min, x_max })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain {
            x_min: -10.0,
            x_max: 10.0,
        }
    }
}

impl TryFrom<(f64, f64)> for Domain {
    type Error = PolyError;

    fn try_from((x_min, x_max): (f64, f64)) -> Result<Self, Self::Error> {
        Domain::new(x_min, x_max)
    }
}

/// most x values a single sampling grid may hold
pub const MAX_POINTS: usize = 10_000_000;

/// step and sample rate must be finite and positive, otherwise the scan never ends
pub fn check_step(step: f64) -> Result<f64, PolyError> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(PolyError::InvalidStep(step))
    }
}

/// valid step that also keeps the grid over domain within MAX_POINTS
pub fn check_grid(domain: &Domain, step: f64) -> Result<f64, PolyError> {
    let step = check_step(step)?;
    if domain.width() / step >= MAX_POINTS as f64 {
        return Err(PolyError::InvalidStep(step));
    }
    Ok(step)
}

/// number of digits after the decimal point in the shortest representation of value
/// (0.1 -> 1, 0.25 -> 2, 2 -> 0)
pub fn decimal_places(value: f64) -> u32 {
    if value.fract() == 0.0 {
        return 0;
    }
    let repr = format!("{}", value);
    match repr.split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    }
}

/// round half up to `digits` decimal places; f64::EPSILON nudges values like 1.005 that sit
/// just below the half
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = (value + f64::EPSILON) * scale + 0.5;
    if !scaled.is_finite() {
        return value;
    }
    scaled.floor() / scale
}

/// Removes points outside the view window |x| <= x_view, |y| <= y_view, except an out-of-view
/// point right before or after an in-view one, so the segments crossing the border survive.
pub fn clip_to_view(points: &[Point], x_view: f64, y_view: f64) -> Vec<Point> {
    let inside = |p: &Point| p.0.abs() <= x_view && p.1.abs() <= y_view;
    points
        .iter()
        .enumerate()
        .filter(|&(i, p)| {
            inside(p)
                || points.get(i + 1).is_some_and(inside)
                || (i > 0 && points.get(i - 1).is_some_and(inside))
        })
        .map(|(_, p)| *p)
        .collect()
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values < 2 {
        return vec![start; num_values];
    }
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + i as f64 * step).collect()
}

// central difference (f(x+h) - f(x-h)) / 2h at every x
pub fn numerical_derivative<F>(f: F, x_values: Vec<f64>, h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    x_values
        .iter()
        .map(|&x| (f(x + h) - f(x - h)) / (2.0 * h))
        .collect()
}

// compute norm of two vectors
pub fn norm(x: Vec<f64>, y: Vec<f64>) -> f64 {
    assert_eq!(x.len(), y.len());
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
