use serde_json::{Map, Value};
use std::io;

use super::{decimal_of, format_scalar};
use crate::export;

/// Write output as CSV to stdout.
///
/// Projections are written as the month / balance series, the same layout
/// as `export-csv`; anything else falls back to field / value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();

    if let Some(Value::Array(series)) = value.pointer("/result/series") {
        let balances: Vec<_> = series.iter().filter_map(decimal_of).collect();
        if let Err(e) = export::csv::write_series(stdout.lock(), &balances) {
            eprintln!("CSV output error: {}", e);
        }
        return;
    }

    let mut wtr = csv::Writer::from_writer(stdout.lock());
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                write_pairs(&mut wtr, result);
            } else if let Some(Value::Array(results)) = map.get("results") {
                write_array_csv(&mut wtr, results);
            } else {
                write_pairs(&mut wtr, map);
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&format_scalar(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_pairs<W: io::Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), format_scalar(val).as_str()]);
    }
}

fn write_array_csv<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_scalar).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_scalar(item)]);
        }
    }
}
