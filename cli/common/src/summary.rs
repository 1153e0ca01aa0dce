//! Run summary printed to stderr after a pipeline completes.

use anyhow::Result;
use pt_pipeline::RunStats;
use std::fmt::Write;

use crate::SummaryFormat;

/// Format bytes as human-readable string.
///
/// # Examples
///
/// ```
/// use pt_cli_common::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 bytes");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Format a large number with commas for readability.
///
/// # Examples
///
/// ```
/// use pt_cli_common::format_number;
///
/// assert_eq!(format_number(123), "123");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Renders the summary of a run.
pub fn render_summary(stats: &RunStats, format: SummaryFormat) -> Result<String> {
    match format {
        SummaryFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        SummaryFormat::Text => Ok(render_text(stats)),
    }
}

/// Prints the summary of a run to stderr.
pub fn print_summary(stats: &RunStats, format: SummaryFormat) -> Result<()> {
    let summary = render_summary(stats, format)?;
    eprintln!();
    eprintln!("{summary}");
    Ok(())
}

fn render_text(stats: &RunStats) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} pipeline completed:", stats.pipeline.to_uppercase());
    let _ = writeln!(out, "  Files read:      {}", stats.files_read);
    if stats.states_processed > 0 {
        let _ = writeln!(out, "  States:          {}", stats.states_processed);
    }
    let _ = writeln!(out, "  Lines read:      {}", format_number(stats.lines_read));
    let _ = writeln!(out, "  Rows joined:     {}", format_number(stats.rows_joined));
    let _ = writeln!(out, "  Lookup misses:   {}", format_number(stats.lookup_misses));
    let _ = writeln!(out, "  Rows skipped:    {}", format_number(stats.rows_skipped));
    let _ = writeln!(out, "  Rows emitted:    {}", format_number(stats.rows_emitted));
    let _ = writeln!(out, "  Bytes read:      {}", format_bytes(stats.bytes_read));
    let _ = write!(out, "  Bytes written:   {}", format_bytes(stats.bytes_written));

    if let Some(duration) = stats.duration() {
        let secs = duration.num_milliseconds() as f64 / 1000.0;
        let _ = write!(out, "\n  Duration:        {:.2}s", secs);

        if secs > 0.0 && stats.lines_read > 0 {
            let _ = write!(
                out,
                "\n  Throughput:      {} lines/sec",
                format_number((stats.lines_read as f64 / secs) as u64)
            );
        }
    }

    out
}
