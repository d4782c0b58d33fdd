//! Post-run export of a sample store.
//!
//! Two formats:
//! - a fixed-width column table, one line per (step, point)
//! - JSON lines, one object per step

use std::collections::BTreeMap;
use std::io::Write;

use fl_fields::UnitTable;
use serde::Serialize;

use crate::ResultsResult;
use crate::store::SampleStore;

/// `<stem>_fields.txt`
pub fn table_file_name(stem: &str) -> String {
    format!("{stem}_fields.txt")
}

/// Write the column table: time, x, y, z, then one column per quantity.
pub fn write_table<W: Write>(
    store: &SampleStore,
    units: &UnitTable,
    mut out: W,
) -> ResultsResult<()> {
    let mut header = vec![
        "/TTIME_(s)".to_string(),
        format!("x_({})", units.length),
        format!("y_({})", units.length),
        format!("z_({})", units.length),
    ];
    for spec in store.quantities() {
        header.push(format!("{}_({})", spec.label(), units.unit_for(spec.label())?));
    }
    let line: Vec<String> = header.iter().map(|h| format!("{h:>13}")).collect();
    writeln!(out, "{}", line.join(" "))?;

    for step in 0..store.step_count() {
        for log_point in store.points() {
            let series = log_point.series();
            let time = series[0].times()[step];
            let [x, y, z] = log_point.point().to_array();

            let mut row = vec![time, x, y, z];
            row.extend(series.iter().map(|s| s.values()[step]));
            let cells: Vec<String> = row.iter().map(|v| format!("{v:13.3E}")).collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
    }
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct StepRecord<'a> {
    time_s: f64,
    points: Vec<PointRecord<'a>>,
}

#[derive(Serialize)]
struct PointRecord<'a> {
    xyz: [f64; 3],
    values: BTreeMap<&'a str, f64>,
}

/// Write one JSON object per committed step.
pub fn write_jsonl<W: Write>(store: &SampleStore, mut out: W) -> ResultsResult<()> {
    if store.quantity_count() == 0 {
        return Ok(());
    }
    for step in 0..store.step_count() {
        let time_s = store.points()[0].series()[0].times()[step];
        let points = store
            .points()
            .iter()
            .map(|lp| PointRecord {
                xyz: lp.point().to_array(),
                values: store
                    .quantities()
                    .iter()
                    .zip(lp.series())
                    .map(|(spec, s)| (spec.label(), s.values()[step]))
                    .collect(),
            })
            .collect();
        serde_json::to_writer(&mut out, &StepRecord { time_s, points })?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
