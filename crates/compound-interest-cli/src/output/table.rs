use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{decimal_of, format_scalar, money};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value, currency_symbol: &str) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result, map, currency_symbol);
            } else if let Some(Value::Array(results)) = map.get("results") {
                print_array_table(results, currency_symbol);
                print_scalars(map);
            } else {
                print_flat_object(map, currency_symbol);
            }
        }
        Value::Array(arr) => print_array_table(arr, currency_symbol),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value, envelope: &Map<String, Value>, currency_symbol: &str) {
    match result {
        Value::Object(res) if res.contains_key("annual_summary") => {
            print_projection(res, currency_symbol)
        }
        Value::Object(res) => print_flat_object(res, currency_symbol),
        _ => print_flat_object(envelope, currency_symbol),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Totals line followed by the year / balance table.
fn print_projection(result: &Map<String, Value>, currency_symbol: &str) {
    if let Some(Value::Object(totals)) = result.get("totals") {
        let amount = |key: &str| {
            totals
                .get(key)
                .and_then(decimal_of)
                .map(|d| money::currency(currency_symbol, d))
                .unwrap_or_default()
        };
        println!(
            "Final balance: {}    |    Total contributed: {}    |    Interest: {}",
            amount("final_balance"),
            amount("total_contributed"),
            amount("interest_earned"),
        );
    }

    if let Some(Value::Number(months)) = result.get("number_of_months") {
        println!("Months: {}", months);
    }

    let mut builder = Builder::default();
    builder.push_record(["Year", "Balance"]);
    if let Some(Value::Array(summary)) = result.get("annual_summary") {
        for entry in summary {
            let year = entry.get("year").map(format_scalar).unwrap_or_default();
            let balance = entry
                .get("balance")
                .and_then(decimal_of)
                .map(|d| money::currency(currency_symbol, d))
                .unwrap_or_default();
            builder.push_record([year, balance]);
        }
    }
    println!("\n{}", Table::from(builder));
}

fn print_flat_object(map: &Map<String, Value>, currency_symbol: &str) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), format_cell(key, val, currency_symbol).as_str()]);
    }
    println!("{}", Table::from(builder));
}

fn print_scalars(map: &Map<String, Value>) {
    for (key, val) in map {
        if !val.is_array() && !val.is_object() {
            println!("{}: {}", key, format_scalar(val));
        }
    }
}

fn print_array_table(arr: &[Value], currency_symbol: &str) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_cell(h, v, currency_symbol))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_scalar(item));
        }
    }
}

/// Monetary columns get currency formatting, everything else is shown as is.
fn format_cell(key: &str, value: &Value, currency_symbol: &str) -> String {
    let monetary = matches!(
        key,
        "final_balance"
            | "total_contributed"
            | "interest_earned"
            | "initial_capital"
            | "monthly_contribution"
            | "balance"
    );
    match (monetary, decimal_of(value)) {
        (true, Some(d)) => money::currency(currency_symbol, d),
        _ => match value {
            Value::Array(items) => items.iter().map(format_scalar).collect::<Vec<_>>().join(", "),
            other => format_scalar(other),
        },
    }
}
