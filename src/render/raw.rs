//! Raw rendering: a label followed by the payload, byte for byte

/// Label printed above a raw CSV payload
pub const CSV_LABEL: &str = "CSV Data:";

/// Label printed above a raw JSON payload
pub const JSON_LABEL: &str = "JSON Response:";

/// Render `payload` unchanged below `label`
pub fn render_raw(label: &str, payload: &str) -> String {
    let mut out = String::with_capacity(label.len() + 1 + payload.len());
    out.push_str(label);
    out.push('\n');
    out.push_str(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_untouched() {
        let payload = "name,memberId\n\"Smith\nJane\",1\r\n  trailing  \n";
        let out = render_raw(CSV_LABEL, payload);

        assert!(out.starts_with("CSV Data:\n"));
        assert_eq!(out.strip_prefix("CSV Data:\n"), Some(payload));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(render_raw(JSON_LABEL, ""), "JSON Response:\n");
    }
}
