use serde_json::Value;

use super::format_scalar;

/// Print just the key answer value from the output.
///
/// For projections that is the final balance; otherwise the first of a few
/// well-known fields, then the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(final_balance) = result_obj.pointer("/totals/final_balance") {
        println!("{}", format_scalar(final_balance));
        return;
    }

    let priority_keys = ["final_balance", "report", "path"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_scalar(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result_obj));
}
