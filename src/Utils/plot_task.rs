//! Plot task: where the polynomial comes from, how to sample it, what to do with the points.
//!
//! A task can be built in code or read from a document parsed by `task_parser`:
//! ```text
//! polynomial
//!   expression: x^2-2x+3
//! sampling
//!   method: adaptive
//!   domain: -10, 10
//!   sample_rate: 0.1
//!   precision: 0.5
//! view
//!   x_view: 10
//!   y_view: 10
//! output
//!   csv: points.csv
//! logging
//!   level: info
//! ```
//! Instead of `expression` the polynomial section may hold `degree` and optional `coefficients`.
use crate::Utils::logger::{save_points_to_csv, save_points_to_file};
use crate::Utils::task_parser::{DocumentMap, Value, parse_document_as, parse_document_from_file};
use crate::polynomial::poly_engine::Polynomial;
use crate::polynomial::poly_error::PolyError;
use crate::polynomial::poly_format::stringify;
use crate::polynomial::poly_parse::parse;
use crate::sampling::adaptive_sampler::{AdaptiveConfig, smart_plot};
use crate::sampling::sampling_utils::{Domain, Point, clip_to_view};
use crate::sampling::uniform_sampler::{UniformConfig, plot};
use log::{info, warn};
use simplelog::*;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// where the polynomial comes from
#[derive(Debug, Clone, PartialEq)]
pub enum PolySource {
    /// degree and dense coefficients (highest exponent first); None means the default
    /// all-ones vector with a zero constant term
    Parameters {
        degree: usize,
        coefficients: Option<Vec<f64>>,
    },
    /// right-hand side typed by the user, "y=" is added when missing
    Expression(String),
}

impl PolySource {
    pub fn to_canonical(&self) -> Result<String, PolyError> {
        match self {
            PolySource::Parameters {
                degree,
                coefficients,
            } => stringify(*degree, coefficients.as_deref()),
            PolySource::Expression(expr) => {
                let expr = expr.trim();
                // "y=", "y =", "y= " all count as the header
                let rhs = expr
                    .strip_prefix('y')
                    .map(str::trim_start)
                    .and_then(|rest| rest.strip_prefix('='))
                    .unwrap_or(expr);
                Ok(format!("y={}", rhs.trim()))
            }
        }
    }

    pub fn to_polynomial(&self) -> Result<Polynomial, PolyError> {
        parse(&self.to_canonical()?)
    }
}

/// sampling configuration: uniform {step} or adaptive {sample_rate, precision}
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingMethod {
    Uniform(UniformConfig),
    Adaptive(AdaptiveConfig),
}

impl Default for SamplingMethod {
    fn default() -> Self {
        SamplingMethod::Uniform(UniformConfig::default())
    }
}

/// visible window |x| <= x_view, |y| <= y_view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub x_view: f64,
    pub y_view: f64,
}

#[derive(Debug, Clone)]
pub struct PlotTask {
    pub source: PolySource,
    pub method: SamplingMethod,
    pub view: Option<ViewWindow>,
    pub csv_output: Option<String>,
    pub txt_output: Option<String>,
    log_level: Option<LevelFilter>,
    log_to_file: Option<String>,
    log_to_console: bool,
}

impl PlotTask {
    pub fn new(source: PolySource, method: SamplingMethod) -> Self {
        PlotTask {
            source,
            method,
            view: None,
            csv_output: None,
            txt_output: None,
            log_level: None,
            log_to_file: None,
            log_to_console: true,
        }
    }

    /// all sections and keys a plot task document may contain
    pub fn template() -> DocumentMap {
        let sections: Vec<(&str, Vec<&str>)> = vec![
            ("polynomial", vec!["expression", "degree", "coefficients"]),
            (
                "sampling",
                vec!["method", "domain", "step", "sample_rate", "precision"],
            ),
            ("view", vec!["x_view", "y_view"]),
            ("output", vec!["csv", "txt"]),
            ("logging", vec!["level", "file", "console"]),
        ];
        sections
            .into_iter()
            .map(|(title, keys)| {
                let keys: HashMap<String, Option<Vec<Value>>> =
                    keys.iter().map(|k| (k.to_string(), None)).collect();
                (title.to_string(), keys)
            })
            .collect()
    }

    pub fn from_document(document: &DocumentMap) -> Result<Self, PolyError> {
        let source = match get_string(document, "polynomial", "expression")? {
            Some(expression) => PolySource::Expression(expression),
            None => {
                let degree = get_values(document, "polynomial", "degree")
                    .and_then(|values| values.first())
                    .map(|value| {
                        value
                            .as_integer()
                            .filter(|d| *d >= 0)
                            .map(|d| d as usize)
                            .ok_or_else(|| {
                                PolyError::Config(format!(
                                    "degree must be a non-negative integer, got {}",
                                    value
                                ))
                            })
                    })
                    .transpose()?
                    .ok_or_else(|| {
                        PolyError::Config(
                            "polynomial needs either 'expression' or 'degree'".to_string(),
                        )
                    })?;
                let coefficients = get_numbers(document, "polynomial", "coefficients")?;
                PolySource::Parameters {
                    degree,
                    coefficients,
                }
            }
        };

        let domain = match get_numbers(document, "sampling", "domain")? {
            Some(bounds) if bounds.len() == 2 => Domain::new(bounds[0], bounds[1])?,
            Some(bounds) => {
                return Err(PolyError::Config(format!(
                    "domain needs 2 values, got {}",
                    bounds.len()
                )));
            }
            None => Domain::default(),
        };
        let method_name = get_string(document, "sampling", "method")?
            .unwrap_or_else(|| "uniform".to_string());
        let method = match method_name.to_lowercase().as_str() {
            "uniform" | "standard" => {
                let defaults = UniformConfig::default();
                SamplingMethod::Uniform(UniformConfig {
                    domain,
                    step: get_number(document, "sampling", "step")?.unwrap_or(defaults.step),
                })
            }
            "adaptive" | "smart" => {
                let defaults = AdaptiveConfig::default();
                SamplingMethod::Adaptive(AdaptiveConfig {
                    domain,
                    sample_rate: get_number(document, "sampling", "sample_rate")?
                        .unwrap_or(defaults.sample_rate),
                    precision: get_number(document, "sampling", "precision")?
                        .unwrap_or(defaults.precision),
                })
            }
            other => {
                return Err(PolyError::Config(format!(
                    "unknown sampling method '{}'",
                    other
                )));
            }
        };

        let mut task = PlotTask::new(source, method);
        task.view = match (
            get_number(document, "view", "x_view")?,
            get_number(document, "view", "y_view")?,
        ) {
            (Some(x_view), Some(y_view)) => Some(ViewWindow { x_view, y_view }),
            (None, None) => None,
            _ => {
                return Err(PolyError::Config(
                    "view needs both x_view and y_view".to_string(),
                ));
            }
        };
        task.csv_output = get_string(document, "output", "csv")?;
        task.txt_output = get_string(document, "output", "txt")?;

        if let Some(level) = get_string(document, "logging", "level")? {
            let level = LevelFilter::from_str(&level)
                .map_err(|_| PolyError::Config(format!("unknown log level '{}'", level)))?;
            task.log_level = Some(level);
        }
        task.log_to_file = get_string(document, "logging", "file")?;
        if let Some(values) = get_values(document, "logging", "console") {
            task.log_to_console = values
                .first()
                .and_then(Value::as_boolean)
                .ok_or_else(|| PolyError::Config("console must be true or false".to_string()))?;
        }
        Ok(task)
    }

    /// build a task from the text of a plot task document
    pub fn from_text(input: &str) -> Result<Self, PolyError> {
        let document = parse_document_as(input, Some(&PlotTask::template()))?;
        PlotTask::from_document(&document)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PolyError> {
        let document = parse_document_from_file(path, Some(&PlotTask::template()))?;
        PlotTask::from_document(&document)
    }

    /// sample the polynomial, clip to the view window and export if requested
    pub fn solve(&self) -> Result<Vec<Point>, PolyError> {
        let poly_str = self.source.to_canonical()?;
        let mut points = match &self.method {
            SamplingMethod::Uniform(config) => plot(&poly_str, config.domain, config.step)?,
            SamplingMethod::Adaptive(config) => smart_plot(&poly_str, config)?,
        };
        if let Some(view) = self.view {
            let before = points.len();
            points = clip_to_view(&points, view.x_view, view.y_view);
            info!(
                "view [{}, {}]: kept {} of {} points",
                view.x_view,
                view.y_view,
                points.len(),
                before
            );
            if points.is_empty() {
                warn!("no points of {} inside the view window", poly_str);
            }
        }
        if let Some(ref filename) = self.csv_output {
            save_points_to_csv(&points, filename)?;
            info!("points saved to {}", filename);
        }
        if let Some(ref filename) = self.txt_output {
            save_points_to_file(&points, filename)?;
            info!("points saved to {}", filename);
        }
        Ok(points)
    }

    ////////////////////////////////logging functions
    /// Set logging level (Off, Error, Warn, Info, Debug, Trace)
    pub fn set_log_level(&mut self, level: LevelFilter) {
        self.log_level = Some(level);
    }

    /// Enable logging to file
    pub fn set_log_file(&mut self, filename: String) {
        self.log_to_file = Some(filename);
    }

    /// Enable/disable console logging
    pub fn set_console_logging(&mut self, enabled: bool) {
        self.log_to_console = enabled;
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.unwrap_or(LevelFilter::Info)
    }

    /// Initialize the global logger from the current settings; only the first call in a
    /// process takes effect
    pub fn init_logger(&self) {
        let level = self.log_level();
        let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
        if self.log_to_console {
            loggers.push(TermLogger::new(
                level,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ));
        }
        if let Some(ref filename) = self.log_to_file {
            match File::create(filename) {
                Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
                Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
            }
        }
        if !loggers.is_empty() {
            let _ = CombinedLogger::init(loggers);
        }
    }
}

fn get_values<'a>(document: &'a DocumentMap, section: &str, key: &str) -> Option<&'a Vec<Value>> {
    document.get(section)?.get(key)?.as_ref()
}

fn get_string(document: &DocumentMap, section: &str, key: &str) -> Result<Option<String>, PolyError> {
    match get_values(document, section, key) {
        None => Ok(None),
        Some(values) if values.len() == 1 => Ok(Some(values[0].to_string_value())),
        Some(values) => Err(PolyError::Config(format!(
            "{}.{} needs a single value, got {}",
            section,
            key,
            values.len()
        ))),
    }
}

fn get_numbers(document: &DocumentMap, section: &str, key: &str) -> Result<Option<Vec<f64>>, PolyError> {
    let Some(values) = get_values(document, section, key) else {
        return Ok(None);
    };
    values
        .iter()
        .map(|value| {
            value.as_f64().ok_or_else(|| {
                PolyError::Config(format!("{}.{}: '{}' is not a number", section, key, value))
            })
        })
        .collect::<Result<Vec<f64>, PolyError>>()
        .map(Some)
}

fn get_number(document: &DocumentMap, section: &str, key: &str) -> Result<Option<f64>, PolyError> {
    match get_numbers(document, section, key)? {
        None => Ok(None),
        Some(numbers) if numbers.len() == 1 => Ok(Some(numbers[0])),
        Some(numbers) => Err(PolyError::Config(format!(
            "{}.{} needs a single number, got {}",
            section,
            key,
            numbers.len()
        ))),
    }
}
