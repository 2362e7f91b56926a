use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(ranked) = map
                .get("result")
                .and_then(|r| r.get("offers"))
                .and_then(Value::as_array)
            {
                write_ranked_csv(&mut wtr, ranked);
            } else if let Some(Value::Object(result)) = map.get("result") {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

/// One row per ranked offer, flattened out of the offer/calculation pair.
fn write_ranked_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, ranked: &[Value]) {
    let _ = wtr.write_record([
        "rank",
        "offer_id",
        "bank_name",
        "interest_rate",
        "monthly_payment",
        "total_payment",
        "total_interest",
    ]);

    for (i, entry) in ranked.iter().enumerate() {
        let offer = entry.get("offer").cloned().unwrap_or(Value::Null);
        let calc = entry.get("calculation").cloned().unwrap_or(Value::Null);
        let _ = wtr.write_record([
            (i + 1).to_string(),
            csv_field(&offer, "id"),
            csv_field(&offer, "bank_name"),
            csv_field(&offer, "interest_rate"),
            csv_field(&calc, "monthly_payment"),
            csv_field(&calc, "total_payment"),
            csv_field(&calc, "total_interest"),
        ]);
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Headers from the first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    }
}

fn csv_field(value: &Value, key: &str) -> String {
    value.get(key).map(format_csv_value).unwrap_or_default()
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
