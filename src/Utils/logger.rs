use crate::polynomial::poly_error::PolyError;
use crate::sampling::sampling_utils::Point;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct PointRow {
    x: f64,
    y: f64,
}

/// save points as tab separated text with a header line
pub fn save_points_to_file<P: AsRef<Path>>(points: &[Point], filename: P) -> Result<(), PolyError> {
    let mut file = File::create(filename)?;
    writeln!(file, "x\ty")?;
    for (x, y) in points {
        writeln!(file, "{}\t{}", x, y)?;
    }
    Ok(())
}

/// save points as csv with columns x, y
pub fn save_points_to_csv<P: AsRef<Path>>(points: &[Point], filename: P) -> Result<(), PolyError> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["x", "y"])?;
    for (x, y) in points {
        writer.write_record([x.to_string(), y.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// pretty table of points for the terminal
pub fn points_table(points: &[Point]) -> String {
    let rows: Vec<PointRow> = points.iter().map(|&(x, y)| PointRow { x, y }).collect();
    let mut table = Table::new(&rows);
    table.with(Style::modern_rounded());
    table.to_string()
}
