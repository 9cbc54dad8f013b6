use serde::Serialize;

const LINE_SEPARATOR: char = '\u{2028}';
const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serializes `value` as JSON that can sit inside an inline `<script>` block.
///
/// `<`, `>` and `&` become unicode escapes so user text cannot close the
/// script element or start an entity, and U+2028/U+2029 are escaped
/// because older JavaScript parsers treat them as line terminators. The
/// output is still valid JSON for the same value.
pub fn safe_serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;

    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' | '>' | '&' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// `$25,000` style price with thousands separators.
///
/// Rounded to cents; cents are shown only when non-zero (`$24,999.99`).
pub fn format_price(price: f64) -> String {
    // `as` saturates, so NaN and negatives land on 0
    let cents = (price * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    grouped.push('$');
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d);
    }
    if cents % 100 != 0 {
        grouped.push_str(&format!(".{:02}", cents % 100));
    }
    grouped
}
