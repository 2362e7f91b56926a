use serde_json::Value;

/// Print just the key answer value from the output.
///
/// A comparison collapses to the best offer's lender and monthly
/// payment; single-loan outputs fall back to a priority list of fields.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Best ranked offer, if this is a comparison
    if let Some(ranked) = result_obj.get("offers").and_then(Value::as_array) {
        match ranked.first() {
            Some(best) => {
                let bank = best
                    .get("offer")
                    .and_then(|o| o.get("bank_name"))
                    .map(format_minimal)
                    .unwrap_or_default();
                let monthly = best
                    .get("calculation")
                    .and_then(|c| c.get("monthly_payment"))
                    .map(format_minimal)
                    .unwrap_or_default();
                println!("{}: {}/month", bank, monthly);
            }
            None => println!("no eligible offers"),
        }
        return;
    }

    let priority_keys = ["monthly_payment", "total_payment", "total_interest"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
