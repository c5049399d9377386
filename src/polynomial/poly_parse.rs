//! Parser: canonical string `y=...` -> (degree, dense coefficient vector)
//!
//! The string is tokenized term by term with `nom`: every term carries its own sign,
//! magnitude and exponent, so negative terms, bare signs (`-x`) and decimal points
//! never need the "replace '-' with '+-' and split on '+'" trick.
//!
//! grammar:
//! ```text
//! poly   := ws "y" ws "=" ws [ term { ws sign ws uterm } ] ws EOF
//! term   := [sign ws] uterm
//! uterm  := number [ "x" [ "^" digits ] ] | "x" [ "^" digits ]
//! number := digits [ "." digits* ] | "." digits
//! ```
//! Degree is the exponent of the first term; exponents must strictly decrease and the
//! degree may not exceed [`MAX_DEGREE`].
use crate::polynomial::poly_engine::Polynomial;
use crate::polynomial::poly_error::PolyError;
use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, space0},
    combinator::{map, map_res, opt, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated},
};

/// highest exponent a parsed polynomial may have; the dense vector holds degree + 1 values
pub const MAX_DEGREE: usize = u16::MAX as usize;

/// one nonzero term of a polynomial string: coefficient * x^exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: usize,
}

/// Parses the "y=" header with optional whitespace around it
fn parse_header(input: &str) -> IResult<&str, char> {
    let mut parser = delimited(space0, preceded(pair(char('y'), space0), char('=')), space0);
    parser.parse(input)
}

/// Parses a sign into a multiplier +1.0 / -1.0
fn parse_sign(input: &str) -> IResult<&str, f64> {
    let mut parser = map(alt((char('+'), char('-'))), |c| if c == '-' { -1.0 } else { 1.0 });
    parser.parse(input)
}

/// Parses an unsigned decimal literal: "3", "2.5", "4.", ".5"
fn parse_magnitude(input: &str) -> IResult<&str, f64> {
    let literal = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let mut parser = map_res(literal, |s: &str| s.parse::<f64>());
    parser.parse(input)
}

/// Parses "x" or "x^n" and returns the exponent
fn parse_power(input: &str) -> IResult<&str, usize> {
    let exponent = map_res(digit1, |s: &str| s.parse::<usize>());
    let mut parser = map(
        preceded(char('x'), opt(preceded(char('^'), exponent))),
        |exponent| exponent.unwrap_or(1),
    );
    parser.parse(input)
}

/// Parses a term without its sign: "3", "2.5x", "x^4", "7x^2"
fn parse_unsigned_term(input: &str) -> IResult<&str, Term> {
    let with_coefficient = map(pair(parse_magnitude, opt(parse_power)), |(magnitude, power)| {
        Term {
            coefficient: magnitude,
            exponent: power.unwrap_or(0),
        }
    });
    let bare_power = map(parse_power, |exponent| Term {
        coefficient: 1.0,
        exponent,
    });
    let mut parser = alt((with_coefficient, bare_power));
    parser.parse(input)
}

/// Leading term, its sign is optional
fn parse_first_term(input: &str) -> IResult<&str, Term> {
    let mut parser = map(
        pair(opt(terminated(parse_sign, space0)), parse_unsigned_term),
        |(sign, term)| Term {
            coefficient: sign.unwrap_or(1.0) * term.coefficient,
            ..term
        },
    );
    parser.parse(input)
}

/// Every following term must start with a sign
fn parse_signed_term(input: &str) -> IResult<&str, Term> {
    let mut parser = map(
        pair(delimited(space0, parse_sign, space0), parse_unsigned_term),
        |(sign, term)| Term {
            coefficient: sign * term.coefficient,
            ..term
        },
    );
    parser.parse(input)
}

/// Parses the right-hand side into the list of present terms, highest exponent first
fn parse_term_list(input: &str) -> IResult<&str, Vec<Term>> {
    let (input, first) = opt(parse_first_term).parse(input)?;
    let Some(first) = first else {
        return Ok((input, Vec::new()));
    };
    let (input, rest) = many0(parse_signed_term).parse(input)?;
    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push(first);
    terms.extend(rest);
    Ok((input, terms))
}

/// Tokenize a canonical polynomial string into its present (nonzero) terms
pub fn parse_terms(poly_str: &str) -> Result<Vec<Term>, PolyError> {
    let (rest, _) = parse_header(poly_str)
        .map_err(|_| PolyError::parse_error(poly_str, "expected 'y=' prefix"))?;
    let (rest, terms) = parse_term_list(rest)
        .map_err(|e| PolyError::parse_error(poly_str, format!("invalid term: {:?}", e)))?;
    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(PolyError::parse_error(
            poly_str,
            format!("unexpected input '{}'", rest),
        ));
    }
    Ok(terms)
}

/// Rebuild the dense coefficient vector from the present terms: the first term fixes the degree,
/// every exponent missing from the list gets an explicit zero.
pub fn dense_coefficients(poly_str: &str, terms: &[Term]) -> Result<(usize, Vec<f64>), PolyError> {
    let Some(first) = terms.first() else {
        // "y=" is the zero polynomial
        return Ok((0, vec![0.0]));
    };
    let degree = first.exponent;
    if degree > MAX_DEGREE {
        return Err(PolyError::parse_error(
            poly_str,
            format!("degree {} exceeds the maximum of {}", degree, MAX_DEGREE),
        ));
    }
    let mut coefficients = vec![0.0; degree + 1];
    let mut expected = degree + 1;
    for term in terms {
        if term.exponent >= expected {
            return Err(PolyError::parse_error(
                poly_str,
                format!(
                    "exponent {} out of order, terms must go from highest to lowest exponent",
                    term.exponent
                ),
            ));
        }
        coefficients[degree - term.exponent] = term.coefficient;
        expected = term.exponent;
    }
    Ok((degree, coefficients))
}

/// Parse a stringified polynomial, returns degree and dense coefficients.
/// # Example
/// ```
/// use RustedPolyPlot::polynomial::poly_parse::parse;
/// let poly = parse("y=x^3+1").unwrap();
/// assert_eq!(poly.degree, 3);
/// assert_eq!(poly.coefficients, vec![1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn parse(poly_str: &str) -> Result<Polynomial, PolyError> {
    let terms = parse_terms(poly_str)?;
    let (degree, coefficients) = dense_coefficients(poly_str, &terms)?;
    debug!(
        "parsed {} -> degree {}, coefficients {:?}",
        poly_str, degree, coefficients
    );
    Polynomial::new(degree, coefficients)
}
