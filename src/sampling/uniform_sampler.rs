//! Uniform sampler: points of a polynomial with a fixed dx (step)
use crate::polynomial::poly_engine::Polynomial;
use crate::polynomial::poly_error::PolyError;
use crate::polynomial::poly_parse::parse;
use crate::sampling::sampling_utils::{Domain, Point, check_grid, decimal_places, round_to};
use log::{debug, info};

/// settings of the uniform sampler, defaults are domain [-10, 10] and step 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformConfig {
    pub domain: Domain,
    pub step: f64,
}

impl Default for UniformConfig {
    fn default() -> Self {
        UniformConfig {
            domain: Domain::default(),
            step: 1.0,
        }
    }
}

/// x values from x_min to x_max inclusive, each rounded to the decimal places of step so the
/// repeated addition does not drift (step 0.1 gives 0.3, not 0.30000000000000004).
/// A step so small that the grid would pass MAX_POINTS is an InvalidStep.
pub fn uniform_grid(domain: &Domain, step: f64) -> Result<Vec<f64>, PolyError> {
    let step = check_grid(domain, step)?;
    let dc = decimal_places(step);
    let mut grid = Vec::new();
    let mut x = domain.x_min;
    while x <= domain.x_max {
        x = round_to(x, dc);
        // past the end, or step lost below the precision of x
        if x > domain.x_max || grid.last().is_some_and(|&last| x <= last) {
            break;
        }
        grid.push(x);
        x += step;
    }
    Ok(grid)
}

impl Polynomial {
    /// Computes points of the polynomial with uniform dx (step)
    pub fn sample_uniform(&self, domain: &Domain, step: f64) -> Result<Vec<Point>, PolyError> {
        let grid = uniform_grid(domain, step)?;
        let points: Vec<Point> = grid.into_iter().map(|x| (x, self.evaluate(x))).collect();
        debug!("uniform sampling of {}: {:?}", self, points);
        Ok(points)
    }
}

/// Computes points of a stringified polynomial over domain = [x_min, x_max] with uniform dx (step)
/// Returns vector of points [(x1, y1),...,(xn, yn)]
/// # Example
/// ```
/// use RustedPolyPlot::sampling::uniform_sampler::plot;
/// use RustedPolyPlot::sampling::sampling_utils::Domain;
/// let points = plot("y=x", Domain::new(0.0, 2.0).unwrap(), 1.0).unwrap();
/// assert_eq!(points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
/// ```
pub fn plot(poly_str: &str, domain: Domain, step: f64) -> Result<Vec<Point>, PolyError> {
    // fields are public: re-check x_max > x_min
    let domain = Domain::new(domain.x_min, domain.x_max)?;
    let poly = parse(poly_str)?;
    let points = poly.sample_uniform(&domain, step)?;
    info!(
        "plot {} on [{}, {}] with step {}: {} points",
        poly_str,
        domain.x_min,
        domain.x_max,
        step,
        points.len()
    );
    Ok(points)
}

/// plot with a UniformConfig
pub fn plot_with(poly_str: &str, config: &UniformConfig) -> Result<Vec<Point>, PolyError> {
    plot(poly_str, config.domain, config.step)
}
