//! CSV - Table Export Formatting
//!
//! RFC 4180 quoting: fields containing commas, quotes, or newlines are
//! wrapped in double quotes with embedded quotes doubled.

/// Quote a single field if it needs quoting
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Build a CSV document from a header row and data rows
pub fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(
        &headers
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push_str("\r\n");
    for row in rows {
        out.push_str(
            &row.iter()
                .map(|f| escape_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push_str("\r\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        let csv = to_csv(&["a", "b"], &[vec!["1".into(), "2".into()]]);
        assert_eq!(csv, "a,b\r\n1,2\r\n");
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let csv = to_csv(
            &["name"],
            &[
                vec!["Vale, Ada".into()],
                vec!["the \"Glow\" campaign".into()],
            ],
        );
        assert_eq!(
            csv,
            "name\r\n\"Vale, Ada\"\r\n\"the \"\"Glow\"\" campaign\"\r\n"
        );
    }

    #[test]
    fn newlines_force_quoting() {
        let csv = to_csv(&["note"], &[vec!["line1\nline2".into()]]);
        assert_eq!(csv, "note\r\n\"line1\nline2\"\r\n");
    }
}
