#[cfg(test)]
mod tests {
    use crate::polynomial::poly_engine::{Polynomial, derivative, evaluate};
    use crate::polynomial::poly_error::PolyError;
    use crate::polynomial::poly_format::stringify;
    use crate::polynomial::poly_parse::parse;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_quadratic() {
        assert_eq!(evaluate("y=x^2-2x+3", 2.0).unwrap(), 3.0);
        assert_eq!(evaluate("y=x^2-2x+3", 0.0).unwrap(), 3.0);
        assert_eq!(evaluate("y=x^2-2x+3", -1.0).unwrap(), 6.0);
    }

    #[test]
    fn test_evaluate_constant_at_zero() {
        // 0^0 counts as 1 for the constant term
        assert_eq!(evaluate("y=5", 0.0).unwrap(), 5.0);
        assert_eq!(evaluate("y=x^3-7", 0.0).unwrap(), -7.0);
    }

    #[test]
    fn test_evaluate_hand_computed() {
        // 0.5x^3 - 2x^2 + 4 at x = 3: 13.5 - 18 + 4
        assert_relative_eq!(evaluate("y=0.5x^3-2x^2+4", 3.0).unwrap(), -0.5, epsilon = 1e-12);
        // -x^4 + x at x = -2: -16 - 2
        assert_relative_eq!(evaluate("y=-x^4+x", -2.0).unwrap(), -18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_malformed() {
        assert!(matches!(evaluate("y=x^^2", 1.0), Err(PolyError::Parse { .. })));
    }

    #[test]
    fn test_derivative_quadratic() {
        assert_eq!(derivative("y=x^2-2x+3").unwrap(), "y=2x-2");
    }

    #[test]
    fn test_derivative_drops_constant() {
        assert_eq!(derivative("y=3x^4+x^2+9").unwrap(), "y=12x^3+2x");
        assert_eq!(derivative("y=-x+4").unwrap(), "y=-1");
    }

    #[test]
    fn test_derivative_of_constant_is_zero_polynomial() {
        assert_eq!(derivative("y=7").unwrap(), "y=");
        assert_eq!(derivative("y=").unwrap(), "y=");
        let zero = Polynomial::zero();
        assert_eq!(zero.derivative(), zero);
    }

    #[test]
    fn test_derivative_rule() {
        let coefficients = vec![2.0, -3.0, 0.5, 7.0, -1.0];
        let poly = Polynomial::new(4, coefficients.clone()).unwrap();
        let d = poly.derivative();
        assert_eq!(d.degree, 3);
        for i in 0..poly.degree {
            assert_eq!(d.coefficients[i], (poly.degree - i) as f64 * coefficients[i]);
        }
    }

    #[test]
    fn test_round_trip() {
        let cases: Vec<(usize, Vec<f64>)> = vec![
            (0, vec![4.0]),
            (1, vec![-1.0, 0.0]),
            (2, vec![1.0, -2.0, 3.0]),
            (3, vec![2.5, 0.0, 0.0, -4.0]),
            (5, vec![-0.125, 1.0, 0.0, -1.0, 12.0, 0.0]),
            (6, vec![3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
        ];
        for (degree, coefficients) in cases {
            let s = stringify(degree, Some(&coefficients)).unwrap();
            let poly = parse(&s).unwrap();
            assert_eq!(poly.degree, degree, "degree of {}", s);
            assert_eq!(poly.coefficients, coefficients, "coefficients of {}", s);
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let poly: Polynomial = "y=x^2-2x+3".parse().unwrap();
        assert_eq!(poly.to_string(), "y=x^2-2x+3");
        assert_eq!(poly, Polynomial::new(2, vec![1.0, -2.0, 3.0]).unwrap());
    }

    #[test]
    fn test_new_length_mismatch() {
        assert_eq!(
            Polynomial::new(3, vec![1.0]),
            Err(PolyError::StructuralMismatch {
                expected: 4,
                found: 1
            })
        );
    }

    #[test]
    fn test_lambdify() {
        let poly: Polynomial = "y=x^3-x".parse().unwrap();
        let f = poly.lambdify();
        assert_eq!(f(2.0), 6.0);
        let g = poly.clone().lambdify_owned();
        assert_eq!(g(-2.0), -6.0);
    }

    #[test]
    fn test_compare_num() {
        let poly: Polynomial = "y=0.5x^4-3x^2+x-2".parse().unwrap();
        let (norm, res) = poly.compare_num(-3.0, 3.0, 50, 1e-4);
        assert!(res, "norm = {}", norm);
    }

    #[test]
    fn test_display_of_overflowed_derivative() {
        // 1e308 written out in full, its derivative coefficient 2e308 overflows to inf
        let huge = format!("y=1{}x^2", "0".repeat(308));
        let poly: Polynomial = huge.parse().unwrap();
        let d = poly.derivative();
        assert_eq!(d.coefficients, vec![f64::INFINITY, 0.0]);
        let shown = d.to_string();
        assert!(shown.contains("inf"), "{}", shown);
        assert!(format!("{} / {}", poly, d).starts_with("y="));
        assert!(matches!(
            derivative(&huge),
            Err(PolyError::NonFiniteCoefficient { index: 0, .. })
        ));
    }

    #[test]
    fn test_compare_num_not_computable() {
        let poly = Polynomial::new(2, vec![1e308, 0.0, 0.0]).unwrap();
        let (norm, res) = poly.compare_num(-1.0, 1.0, 5, 1e-3);
        assert!(norm.is_nan());
        assert!(!res);
    }
}
