use std::io::Write;

use csv::Writer;
use ndarray::ArrayView1;
use serde::Serialize;

use crate::{disc::mesh::mesh1d::Mesh1d, error::SchemeResult};

#[derive(Serialize)]
struct PointData {
    x: f64,
    solution: f64,
}

/// Writes one `x,solution` row per physical cell.
pub fn write_to_csv(solution: ArrayView1<f64>, mesh: &Mesh1d, filename: &str) -> SchemeResult<()> {
    let writer = Writer::from_path(filename)?;
    write_rows(writer, solution, mesh)
}

pub fn write_rows<W: Write>(
    mut writer: Writer<W>,
    solution: ArrayView1<f64>,
    mesh: &Mesh1d,
) -> SchemeResult<()> {
    for i in mesh.interior() {
        let data = PointData {
            x: mesh.x[i],
            solution: solution[i],
        };
        writer.serialize(data)?;
    }
    writer.flush()?;
    Ok(())
}
