use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::playlist::VideoRecord;

const DATE_WIDTH: usize = 10; // YYYY-MM-DD
const DURATION_WIDTH: usize = 8; // HH:MM:SS

/// Render records as an aligned table bounded by the given terminal width.
/// Unenriched records get a blank duration column.
pub fn render_table(records: &[VideoRecord], width: usize) -> String {
    let title_width = width
        .saturating_sub(DATE_WIDTH + DURATION_WIDTH + 4)
        .max(8);

    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{}  {:>dw$}  {}\n",
            record.upload_date.format("%Y-%m-%d"),
            record.duration.as_deref().unwrap_or(""),
            truncate(&record.title, title_width),
            dw = DURATION_WIDTH,
        ));
    }
    out
}

/// Write records as tab-separated lines: date, duration, title, video id
pub fn write_tsv(path: &Path, records: &[VideoRecord]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    for record in records {
        writeln!(file, "{}", tsv_line(record))?;
    }
    Ok(())
}

fn tsv_line(record: &VideoRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        record.upload_date.format("%Y-%m-%d"),
        record.duration.as_deref().unwrap_or(""),
        record.title,
        record.video_id,
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(kept).collect();
    truncated.push_str("...");
    truncated
}
