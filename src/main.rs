#![allow(non_snake_case)]
use RustedPolyPlot::Examples::poly_examples::poly_examples;
use RustedPolyPlot::Utils::logger::points_table;
use RustedPolyPlot::Utils::plot_task::PlotTask;
use std::process::ExitCode;

// usage:
//   RustedPolyPlot <task file>   sample the polynomial described in the task file
//   RustedPolyPlot               run the built-in examples
fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1) {
        Some(path) => PlotTask::from_file(path).and_then(|task| {
            task.init_logger();
            let points = task.solve()?;
            println!("{}", points_table(&points));
            Ok(())
        }),
        None => (0..=5).try_for_each(poly_examples),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
