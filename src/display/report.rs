//! Formatting helpers for terminal reports
//!
//! Widths are counted in characters, not bytes: item and category names
//! are routinely accented ("Thé", "Aïd al-Adha").

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A horizontal bar `width` cells wide, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Display width of a string, in characters
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if text_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

pub fn right_align(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

pub fn left_align(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Column alignment for [`render_table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render rows under a header with dashed separators, columns sized to fit
pub fn render_table(headers: &[(&str, Align)], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, (title, _))| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|cell| text_width(cell))
                .max()
                .unwrap_or(0)
                .max(text_width(title))
        })
        .collect();

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(headers.iter().zip(&widths))
            .map(|(cell, ((_, align), width))| match align {
                Align::Left => left_align(cell, *width),
                Align::Right => right_align(cell, *width),
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&line(headers.iter().map(|(t, _)| t.to_string()).collect()));
    output.push('\n');
    output.push_str(&line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    output.push('\n');
    for row in rows {
        output.push_str(&line(row.clone()));
        output.push('\n');
    }
    output
}
