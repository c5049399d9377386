//! point sampling of polynomials for the rendering layer
/// Point, Domain, decimal rounding of x, view clipping, linspace
pub mod sampling_utils;
///________________________________________________________________________________________________________________________________
/// # Uniform sampler
/// points with fixed dx from x_min to x_max inclusive
///# Example
/// ```
/// use RustedPolyPlot::sampling::uniform_sampler::plot;
/// use RustedPolyPlot::sampling::sampling_utils::Domain;
/// let points = plot("y=x^2", Domain::new(-1.0, 1.0).unwrap(), 0.5).unwrap();
/// assert_eq!(points.len(), 5);
/// ```
pub mod uniform_sampler;
///________________________________________________________________________________________________________________________________
/// # Adaptive sampler
/// points only where the derivative changed by at least `precision` since the last point
///# Example
/// ```
/// use RustedPolyPlot::sampling::adaptive_sampler::{smart_plot, AdaptiveConfig};
/// use RustedPolyPlot::sampling::sampling_utils::Domain;
/// let config = AdaptiveConfig::new(Domain::new(-5.0, 5.0).unwrap(), 0.01, 0.25);
/// let points = smart_plot("y=x^3-3x", &config).unwrap();
/// println!("{} points", points.len());
/// ```
pub mod adaptive_sampler;
