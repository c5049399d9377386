// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::logger::points_table;
use crate::Utils::plot_task::{PlotTask, PolySource, SamplingMethod, ViewWindow};
use crate::polynomial::poly_engine::{Polynomial, derivative, evaluate};
use crate::polynomial::poly_error::PolyError;
use crate::polynomial::poly_format::stringify;
use crate::polynomial::poly_parse::parse;
use crate::sampling::adaptive_sampler::{AdaptiveConfig, smart_plot};
use crate::sampling::sampling_utils::Domain;
use crate::sampling::uniform_sampler::plot;

pub fn poly_examples(example: usize) -> Result<(), PolyError> {
    match example {
        0 => {
            // FROM PARAMETERS TO STRING AND BACK
            let s = stringify(2, Some(&[1.0, -2.0, 3.0]))?;
            println!("stringified: {}", s);
            // no coefficients given: all ones with zero constant term
            println!("default cubic: {}", stringify(3, None)?);
            // zero coefficients vanish from the string but come back after parsing
            let sparse = stringify(4, Some(&[-0.5, 0.0, 0.0, 2.0, 0.0]))?;
            let parsed = parse(&sparse)?;
            println!(
                "{} -> degree {}, coefficients {:?}",
                sparse, parsed.degree, parsed.coefficients
            );
        }
        1 => {
            // EVALUATION AND DERIVATIVE
            let poly_str = "y=x^2-2x+3";
            println!("{} at x = 2: {}", poly_str, evaluate(poly_str, 2.0)?);
            let d = derivative(poly_str)?;
            println!("derivative: {}, at x = 2: {}", d, evaluate(&d, 2.0)?);
            // compare analytical and numerical derivatives on linspace
            let poly: Polynomial = "y=0.1x^5-x^3+2".parse()?;
            let (norm, res) = poly.compare_num(-3.0, 3.0, 100, 1e-6);
            println!("norm = {}, res = {}", norm, res);
        }
        2 => {
            // UNIFORM SAMPLING
            let points = plot("y=x^3-3x", Domain::new(-2.0, 2.0)?, 0.25)?;
            println!("{}", points_table(&points));
        }
        3 => {
            // ADAPTIVE SAMPLING: dense where the slope changes, sparse where it does not
            let config = AdaptiveConfig::new(Domain::new(-3.0, 3.0)?, 0.01, 0.5);
            let points = smart_plot("y=x^3-3x", &config)?;
            let uniform = plot("y=x^3-3x", config.domain, config.sample_rate)?;
            println!(
                "adaptive: {} points, uniform with the same step: {} points",
                points.len(),
                uniform.len()
            );
            println!("{}", points_table(&points));
        }
        4 => {
            // PLOT TASK BUILT IN CODE
            let mut task = PlotTask::new(
                PolySource::Expression("-x^4+4x^2".to_string()),
                SamplingMethod::Adaptive(AdaptiveConfig::default()),
            );
            task.view = Some(ViewWindow {
                x_view: 3.0,
                y_view: 5.0,
            });
            let points = task.solve()?;
            println!("{}", points_table(&points));
        }
        5 => {
            // PLOT TASK FROM A DOCUMENT
            let document = r#"
            polynomial
              degree: 3
              coefficients: 1, 0, -2, 1
            sampling
              method: uniform
              domain: -2, 2
              step: 0.5
            "#;
            let task = PlotTask::from_text(document)?;
            let points = task.solve()?;
            println!("{}", points_table(&points));
        }
        _ => {
            println!("example {} does not exist", example);
        }
    }
    Ok(())
}
