//! Adaptive ("smart") sampler.
//!
//! The domain is scanned with a fine step (sample_rate), the derivative is evaluated at every
//! scan point, and a point is recorded only when the derivative has changed by at least
//! `precision` since the last recorded point. Near-linear stretches get few points, bends get many.
//! One pass, no lookahead: each decision depends only on the last recorded gradient.
use crate::polynomial::poly_engine::Polynomial;
use crate::polynomial::poly_error::PolyError;
use crate::polynomial::poly_parse::parse;
use crate::sampling::sampling_utils::{Domain, Point};
use crate::sampling::uniform_sampler::uniform_grid;
use log::{debug, info};

/// settings of the adaptive sampler
/// sample_rate - x step of the scan (smaller for better accuracy)
/// precision - difference of gradient for a point to count (smaller for denser graphing)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveConfig {
    pub domain: Domain,
    pub sample_rate: f64,
    pub precision: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        AdaptiveConfig {
            domain: Domain::default(),
            sample_rate: 0.1,
            precision: 0.5,
        }
    }
}

impl AdaptiveConfig {
    pub fn new(domain: Domain, sample_rate: f64, precision: f64) -> Self {
        AdaptiveConfig {
            domain,
            sample_rate,
            precision,
        }
    }
}

impl Polynomial {
    /// gradient-driven sampling, the first point is always (x_min, f(x_min))
    pub fn sample_adaptive(&self, config: &AdaptiveConfig) -> Result<Vec<Point>, PolyError> {
        let precision = config.precision;
        if precision.is_nan() || precision < 0.0 {
            return Err(PolyError::InvalidPrecision(precision));
        }
        let grid = uniform_grid(&config.domain, config.sample_rate)?;
        let derivative = self.derivative();
        let x_min = config.domain.x_min;

        let mut points: Vec<Point> = vec![(x_min, self.evaluate(x_min))];
        let mut last_x = x_min;
        let mut last_gradient = derivative.evaluate(x_min);
        for x in grid {
            let gradient = derivative.evaluate(x);
            if (gradient - last_gradient).abs() >= precision && x > last_x {
                points.push((x, self.evaluate(x)));
                last_x = x;
                last_gradient = gradient;
            }
        }
        debug!(
            "adaptive sampling of {} with derivative {}: {:?}",
            self, derivative, points
        );
        Ok(points)
    }
}

/// Computes points of a stringified polynomial, denser where its gradient changes
/// # Example
/// ```
/// use RustedPolyPlot::sampling::adaptive_sampler::{smart_plot, AdaptiveConfig};
/// let points = smart_plot("y=x^2", &AdaptiveConfig::default()).unwrap();
/// assert_eq!(points[0], (-10.0, 100.0));
/// ```
pub fn smart_plot(poly_str: &str, config: &AdaptiveConfig) -> Result<Vec<Point>, PolyError> {
    // fields are public: re-check x_max > x_min
    Domain::new(config.domain.x_min, config.domain.x_max)?;
    let poly = parse(poly_str)?;
    let points = poly.sample_adaptive(config)?;
    info!(
        "smart plot {} on [{}, {}], sample rate {}, precision {}: {} points",
        poly_str,
        config.domain.x_min,
        config.domain.x_max,
        config.sample_rate,
        config.precision,
        points.len()
    );
    Ok(points)
}
