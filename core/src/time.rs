use chrono::NaiveDateTime;
use anyhow::{anyhow, Result};

/// Input grammar for deadline and event times: `YYYY-MM-DD HH:MM`, 24-hour clock.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    // chrono accepts single-digit fields for %m/%d/%H/%M, the grammar does not.
    if !has_fixed_shape(input) {
        return Err(anyhow!("Could not parse date: {}", input));
    }
    NaiveDateTime::parse_from_str(input, INPUT_FORMAT)
        .map_err(|e| anyhow!("Could not parse date '{}': {}", input, e))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

fn has_fixed_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 16 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}
