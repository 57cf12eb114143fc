//! Display formatting helpers shared across pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a byte count with a binary-ish unit, matching upload UI copy.
#[must_use]
pub fn format_file_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes.max(0) as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Render a ratio as a whole percentage.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{}%", value.round())
}

/// Date portion of an ISO 8601 timestamp (`2024-01-05T...` -> `2024-01-05`).
#[must_use]
pub fn format_date(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Title-case a backend enum label (`NEEDS_REVIEW` -> `Needs Review`).
#[must_use]
pub fn humanize_label(label: &str) -> String {
    label
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
