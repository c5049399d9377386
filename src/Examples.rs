//! examples of usage of RustedPolyPlot
/// polynomial formatting, parsing, evaluation and sampling examples
pub mod poly_examples;
