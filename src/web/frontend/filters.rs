use serde_json::Value;
use std::collections::HashMap;

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Write the digits of a number or a string with Arabic-Indic digits.
pub fn arabic_digits(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => return Err(tera::Error::msg(format!("Can't write digits of {other}"))),
    };

    Ok(Value::String(
        text.chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|digit| ARABIC_DIGITS[digit as usize])
                    .unwrap_or(c)
            })
            .collect(),
    ))
}
