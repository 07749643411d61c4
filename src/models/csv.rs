use chrono::NaiveDate;

pub const CSV_MIME: &str = "text/csv; charset=utf-8";

/// Quote a field when it contains the delimiter, a quote, or a newline.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Assemble a document from a header line and unescaped field rows.
pub fn build_csv(header: &str, rows: &[Vec<String>]) -> String {
    let mut csv = String::from(header);
    csv.push('\n');
    for row in rows {
        let escaped: Vec<String> = row.iter().map(|f| escape_csv(f)).collect();
        csv.push_str(&escaped.join(","));
        csv.push('\n');
    }
    csv
}

/// Download file name: `{entity}_{identifier-or-report}_{ISO date}.csv`.
pub fn export_filename(entity: &str, identifier: Option<&str>, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.csv",
        entity,
        identifier.unwrap_or("report"),
        date.format("%Y-%m-%d")
    )
}
