use std::fmt::Write;

use crate::captions::models::CaptionLine;

// @module: SRT rendering for packed caption lines

/// Format seconds as an SRT timestamp (HH:MM:SS,mmm). Negative input clamps to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Render caption lines as an SRT document, numbering entries from 1
pub fn to_srt(lines: &[CaptionLine]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(out, "{}", i + 1);
        let _ = writeln!(
            out,
            "{} --> {}",
            format_timestamp(line.start),
            format_timestamp(line.end)
        );
        let _ = writeln!(out, "{}", line.text);
        let _ = writeln!(out);
    }
    out
}
