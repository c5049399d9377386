//! Formatter: dense coefficient vector -> canonical string `y=ax^n+bx^(n-1)...+cx+d`
use crate::polynomial::poly_error::PolyError;

/// x-part of a term: "" for the constant, "x" for the linear term, "x^n" otherwise
pub fn exponent_term(deg: usize) -> String {
    match deg {
        0 => String::new(),
        1 => "x".to_string(),
        _ => format!("x^{}", deg),
    }
}

/// coefficients used when none are given: all ones, constant term 0
pub fn default_coefficients(degree: usize) -> Vec<f64> {
    let mut coefficients = vec![1.0; degree + 1];
    coefficients[degree] = 0.0;
    coefficients
}

/// Stringify a polynomial of given degree.
/// Optionally pass the dense vector of coefficients [a, b,..., c, d] (highest exponent first),
/// its length must be degree + 1. Zero coefficients are left out of the string; if all of them
/// are zero the result is exactly "y=".
/// # Example
/// ```
/// use RustedPolyPlot::polynomial::poly_format::stringify;
/// assert_eq!(stringify(2, Some(&[1.0, -2.0, 3.0])).unwrap(), "y=x^2-2x+3");
/// assert_eq!(stringify(3, None).unwrap(), "y=x^3+x^2+x");
/// ```
pub fn stringify(degree: usize, coefficients: Option<&[f64]>) -> Result<String, PolyError> {
    let defaults;
    let coefficients = match coefficients {
        Some(coefficients) => {
            if coefficients.len() != degree + 1 {
                return Err(PolyError::StructuralMismatch {
                    expected: degree + 1,
                    found: coefficients.len(),
                });
            }
            coefficients
        }
        None => {
            defaults = default_coefficients(degree);
            defaults.as_slice()
        }
    };

    let mut poly_string = String::from("y=");
    let mut first = true;
    for (i, &cf) in coefficients.iter().enumerate() {
        if !cf.is_finite() {
            return Err(PolyError::NonFiniteCoefficient {
                index: i,
                value: cf,
            });
        }
        if cf == 0.0 {
            continue;
        }
        let x_term = exponent_term(degree - i);
        if cf == 1.0 || cf == -1.0 {
            if cf < 0.0 {
                poly_string.push('-');
            } else if !first {
                poly_string.push('+');
            }
            if x_term.is_empty() {
                poly_string.push('1');
            } else {
                poly_string.push_str(&x_term);
            }
        } else {
            // negative literals carry their own sign
            if !first && cf > 0.0 {
                poly_string.push('+');
            }
            poly_string.push_str(&format!("{}{}", cf, x_term));
        }
        first = false;
    }
    Ok(poly_string)
}
