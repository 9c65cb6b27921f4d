use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, NaiveDateTime, Utc};
use regex::Regex;

/// Lexical families of timestamps the rewriter knows how to shift, keyed off
/// the item's sourcetype/source hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeShape {
    Iso8601,
    WinEventText,
    Syslog,
}

impl TimeShape {
    fn pattern(self) -> &'static str {
        match self {
            Self::Iso8601 => r"\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}",
            Self::WinEventText => r"\d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2} [AP]M",
            Self::Syslog => r"(?m)^[A-Z][a-z]{2} [ 0-3]\d \d{2}:\d{2}:\d{2}",
        }
    }

    fn parse(self, raw: &str, reference_year: i32) -> Result<NaiveDateTime> {
        match self {
            Self::Iso8601 => {
                let normalized = format!("{}T{}", &raw[..10], &raw[11..]);
                NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S")
                    .with_context(|| format!("unparsable timestamp {raw:?}"))
            }
            Self::WinEventText => NaiveDateTime::parse_from_str(raw, "%m/%d/%Y %I:%M:%S %p")
                .with_context(|| format!("unparsable timestamp {raw:?}")),
            // syslog timestamps carry no year; borrow the reference year
            Self::Syslog => NaiveDateTime::parse_from_str(
                &format!("{reference_year} {raw}"),
                "%Y %b %e %H:%M:%S",
            )
            .with_context(|| format!("unparsable timestamp {raw:?}")),
        }
    }

    fn render_like(self, original: &str, shifted: NaiveDateTime) -> String {
        match self {
            Self::Iso8601 => {
                let sep = original.as_bytes()[10] as char;
                format!(
                    "{}{}{}",
                    shifted.format("%Y-%m-%d"),
                    sep,
                    shifted.format("%H:%M:%S")
                )
            }
            Self::WinEventText => shifted.format("%m/%d/%Y %I:%M:%S %p").to_string(),
            Self::Syslog => shifted.format("%b %e %H:%M:%S").to_string(),
        }
    }
}

fn shape_for(sourcetype: &str, source: &str) -> Option<TimeShape> {
    let st = sourcetype.to_ascii_lowercase();
    let src = source.to_ascii_lowercase();
    if st.starts_with("xmlwineventlog") {
        // SystemTime='2022-01-01T00:00:00.000Z' attributes
        return Some(TimeShape::Iso8601);
    }
    if st.starts_with("wineventlog") {
        return Some(TimeShape::WinEventText);
    }
    if st.starts_with("aws:") || st.contains("json") || src.contains("cloudtrail") {
        return Some(TimeShape::Iso8601);
    }
    if st.contains("syslog") || st == "linux_secure" || src.starts_with("/var/log") {
        return Some(TimeShape::Syslog);
    }
    None
}

/// Rewrites recorded timestamps so replayed data lands inside the detection's
/// search window: every match is shifted forward by the same delta, putting
/// the newest event at "now" while keeping the relative spacing intact.
pub struct TimestampRewriter {
    now: NaiveDateTime,
}

impl TimestampRewriter {
    pub fn new() -> Self {
        Self {
            now: Utc::now().naive_utc(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_now(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Rewrite `path` in place. The file must already be the replay's private
    /// copy; the caller never hands the original recording in here.
    pub fn rewrite(&self, path: &Path, sourcetype: &str, source: &str) -> Result<()> {
        let shape = shape_for(sourcetype, source).ok_or_else(|| {
            anyhow!("no timestamp rewrite rule for sourcetype {sourcetype:?} (source {source:?})")
        })?;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        let rewritten = self.shift_matches(&contents, shape)?;
        std::fs::write(path, rewritten)
            .with_context(|| format!("failed writing {}", path.display()))?;
        Ok(())
    }

    fn shift_matches(&self, contents: &str, shape: TimeShape) -> Result<String> {
        let regex = Regex::new(shape.pattern()).context("invalid timestamp pattern")?;
        let year = self.now.year();

        let mut newest: Option<NaiveDateTime> = None;
        for m in regex.find_iter(contents) {
            let parsed = shape.parse(m.as_str(), year)?;
            if newest.map_or(true, |t| parsed > t) {
                newest = Some(parsed);
            }
        }
        let Some(newest) = newest else {
            bail!("no timestamps matched; replayed data would fall outside the search window");
        };
        let delta = self.now - newest;

        let mut failure: Option<anyhow::Error> = None;
        let rewritten = regex.replace_all(contents, |caps: &regex::Captures<'_>| {
            let raw = &caps[0];
            match shape.parse(raw, year) {
                Ok(parsed) => shape.render_like(raw, parsed + delta),
                Err(err) => {
                    failure = Some(err);
                    raw.to_string()
                }
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(rewritten.into_owned())
    }
}
