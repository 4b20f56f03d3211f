//! Creation-timestamp metadata parsing.
//!
//! Extractors report the document creation date either already normalized
//! (RFC 3339) or verbatim from the PDF info dictionary ("D:20240118034112-05'00'").

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

/// Parse extractor-supplied creation metadata into an offset-resolved
/// timestamp.
pub fn parse_creation_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts);
    }
    parse_pdf_date(raw).with_context(|| format!("unrecognized creation date {raw:?}"))
}

/// PDF date string: `D:YYYYMMDDHHmmSS` with everything after the year
/// optional, followed by `Z` or a `+HH'mm'` style offset. Missing clock
/// fields default to zero, a missing offset to UTC.
fn parse_pdf_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    let s = raw.strip_prefix("D:").unwrap_or(raw);

    let digit_count = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count < 4 {
        bail!("no date digits");
    }
    let stamp = &s[..digit_count.min(14)];
    let rest = &s[stamp.len()..];

    // Slices of `stamp` are all digits, so the parses cannot fail.
    let field = |range: std::ops::Range<usize>, default: u32| -> u32 {
        stamp
            .get(range)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    };

    let date = NaiveDate::from_ymd_opt(field(0..4, 0) as i32, field(4..6, 1), field(6..8, 1))
        .context("date out of range")?;
    let time = NaiveTime::from_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0))
        .context("clock out of range")?;

    date.and_time(time)
        .and_local_timezone(parse_offset(rest)?)
        .single()
        .context("unrepresentable local time")
}

/// `Z`, empty, or a signed `HH` / `HH'mm'` / `HHmm` / `HH:mm` offset.
fn parse_offset(rest: &str) -> Result<FixedOffset> {
    let rest = rest.trim();
    if rest.is_empty() || rest.starts_with('Z') {
        return FixedOffset::east_opt(0).context("utc offset");
    }

    let sign = match rest.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => bail!("bad offset {rest:?}"),
    };
    let digits: String = rest[1..].chars().filter(|c| c.is_ascii_digit()).collect();
    let (hours, minutes) = match digits.len() {
        2 => (digits[0..2].parse::<i32>()?, 0),
        4 => (digits[0..2].parse::<i32>()?, digits[2..4].parse::<i32>()?),
        _ => bail!("bad offset {rest:?}"),
    };

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("offset out of range {rest:?}"))
}
