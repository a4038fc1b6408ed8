use unicode_width::UnicodeWidthStr;

/// Format minutes as "Xh Ym" or "Y min"
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{} min", rest)
    }
}

/// Format a number, trimming a trailing ".0" and grouping thousands
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        group_thousands(value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Short form for chart labels: 10.2k, 950, 7.5
pub fn format_compact(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format_number(value)
    }
}

/// Value with its unit, or a dash for a day without a reading
pub fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", format_number(v), unit),
        None => "—".to_string(),
    }
}

/// Create a simple progress bar; `ratio` is clamped to 0..=1
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// One block character per value, scaled to the largest; gaps become spaces
pub fn sparkline(values: &[Option<f64>]) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let max = values.iter().flatten().fold(0.0_f64, |m, v| m.max(*v));
    values
        .iter()
        .map(|v| match v {
            None => ' ',
            Some(_) if max <= 0.0 => BLOCKS[0],
            Some(v) => {
                let idx = ((v / max) * (BLOCKS.len() - 1) as f64).round() as usize;
                BLOCKS[idx.min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}

/// Right-pad to a display width (names can carry wide characters)
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
