//! # Polynomial engine
//!
//! `Polynomial` is the dense, validated form of a single-variable polynomial:
//! `coefficients[i]` multiplies `x^(degree - i)`. It is created per call and never mutated
//! in place; derivative and formatting return new values.
//!
//! The free functions `evaluate` and `derivative` take the canonical string directly, as
//! the rendering layer holds polynomials only in their `y=...` form.
use crate::polynomial::poly_error::PolyError;
use crate::polynomial::poly_format::stringify;
use crate::polynomial::poly_parse::parse;
use crate::sampling::sampling_utils::{linspace, norm, numerical_derivative};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    pub degree: usize,
    pub coefficients: Vec<f64>,
}

impl Polynomial {
    /// dense polynomial, coefficients.len() must be degree + 1
    pub fn new(degree: usize, coefficients: Vec<f64>) -> Result<Self, PolyError> {
        if coefficients.len() != degree + 1 {
            return Err(PolyError::StructuralMismatch {
                expected: degree + 1,
                found: coefficients.len(),
            });
        }
        Ok(Polynomial {
            degree,
            coefficients,
        })
    }

    /// zero polynomial of degree 0
    pub fn zero() -> Self {
        Polynomial {
            degree: 0,
            coefficients: vec![0.0],
        }
    }

    /// y = sum coefficients[i] * x^(degree - i), 0^0 = 1
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, cf)| cf * x.powi((self.degree - i) as i32))
            .sum()
    }

    /// d/dx: coefficient i becomes (degree - i) * coefficients[i], the constant term is dropped.
    /// The derivative of a constant is the zero polynomial.
    pub fn derivative(&self) -> Polynomial {
        if self.degree == 0 {
            return Polynomial::zero();
        }
        let coefficients = self.coefficients[..self.degree]
            .iter()
            .enumerate()
            .map(|(i, cf)| (self.degree - i) as f64 * cf)
            .collect();
        Polynomial {
            degree: self.degree - 1,
            coefficients,
        }
    }

    /// canonical "y=..." string
    pub fn to_canonical(&self) -> Result<String, PolyError> {
        stringify(self.degree, Some(&self.coefficients))
    }

    /// turn the polynomial into a regular Rust function of x
    pub fn lambdify(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }

    /// owned version of lambdify, the closure keeps its own copy of coefficients
    pub fn lambdify_owned(self) -> impl Fn(f64) -> f64 {
        move |x| self.evaluate(x)
    }

    /// compare analytical and numerical derivatives on linspace(start, end, num_values);
    /// returns the norm of the difference and whether it is below max_norm.
    /// When either derivative overflows (huge coefficients) the norm is NaN and the check is
    /// false: test `norm.is_nan()` to tell "not computable" from a real mismatch.
    pub fn compare_num(&self, start: f64, end: f64, num_values: usize, max_norm: f64) -> (f64, bool) {
        let x_values = linspace(start, end, num_values);
        let analytical_derivative = self.derivative();
        let analytical: Vec<f64> = x_values
            .iter()
            .map(|&x| analytical_derivative.evaluate(x))
            .collect();
        let numerical = numerical_derivative(self.lambdify(), x_values, 1e-5);
        let norm = norm(analytical, numerical);
        (norm, norm < max_norm)
    }
}

/// canonical form; coefficients that overflowed to inf/NaN have no canonical form, so those
/// are shown as the raw dense vector instead
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_canonical() {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(
                f,
                "y=<degree {}, coefficients {:?}>",
                self.degree, self.coefficients
            ),
        }
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Evaluates the value of a polynomial given as a canonical string at x
/// # Example
/// ```
/// use RustedPolyPlot::polynomial::poly_engine::evaluate;
/// assert_eq!(evaluate("y=x^2-2x+3", 2.0).unwrap(), 3.0);
/// ```
pub fn evaluate(poly_str: &str, x: f64) -> Result<f64, PolyError> {
    let poly = parse(poly_str)?;
    Ok(poly.evaluate(x))
}

/// Computes the derivative of a polynomial given as a canonical string and returns it stringified
/// # Example
/// ```
/// use RustedPolyPlot::polynomial::poly_engine::derivative;
/// assert_eq!(derivative("y=x^2-2x+3").unwrap(), "y=2x-2");
/// ```
pub fn derivative(poly_str: &str) -> Result<String, PolyError> {
    let poly = parse(poly_str)?;
    poly.derivative().to_canonical()
}
