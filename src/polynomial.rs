#![allow(non_snake_case)]
/// error type shared by the whole crate
pub mod poly_error;
///________________________________________________________________________________________________________________________________
/// # Formatter
/// turns degree and a dense vector of coefficients into the canonical string "y=ax^n+...+cx+d"
///# Example
/// ```
/// use RustedPolyPlot::polynomial::poly_format::stringify;
/// let s = stringify(2, Some(&[1.0, -2.0, 3.0])).unwrap();
/// assert_eq!(s, "y=x^2-2x+3");
/// // without coefficients: all ones, constant term 0
/// assert_eq!(stringify(3, None).unwrap(), "y=x^3+x^2+x");
/// ```
pub mod poly_format;
///________________________________________________________________________________________________________________________________
/// # Parser
/// turns a canonical string back into degree and dense coefficients, zeros included
///# Example
/// ```
/// use RustedPolyPlot::polynomial::poly_parse::parse;
/// let poly = parse("y=x^2-2x+3").unwrap();
/// assert_eq!(poly.degree, 2);
/// assert_eq!(poly.coefficients, vec![1.0, -2.0, 3.0]);
/// ```
pub mod poly_parse;
///________________________________________________________________________________________________________________________________
/// # Polynomial engine
/// 1) evaluates a polynomial at x
/// 2) computes its derivative
/// 3) turns it into a regular Rust function
///# Example
/// ```
/// use RustedPolyPlot::polynomial::poly_engine::{Polynomial, derivative, evaluate};
/// assert_eq!(evaluate("y=x^2-2x+3", 2.0).unwrap(), 3.0);
/// assert_eq!(derivative("y=x^2-2x+3").unwrap(), "y=2x-2");
/// let poly: Polynomial = "y=x^3-x".parse().unwrap();
/// let f = poly.lambdify();
/// println!("f(2) = {}, f'(x) = {}", f(2.0), poly.derivative());
/// ```
pub mod poly_engine;
mod poly_engine_tests;
