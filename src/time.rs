use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A whole number of seconds into the source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOffset(u64);

impl TimeOffset {
    pub fn from_secs(secs: u64) -> Self {
        TimeOffset(secs)
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }

    /// Parses `mm:ss`. Seconds are not clamped, so `0:90` is 90 seconds.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let fail = |reason: &str| Error::Format {
            input: text.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = text.split(':').collect();
        if fields.len() != 2 {
            return Err(fail("expected exactly one ':' as in mm:ss"));
        }

        let minutes: u64 = fields[0]
            .trim()
            .parse()
            .map_err(|_| fail("minutes are not a number"))?;
        let seconds: u64 = fields[1]
            .trim()
            .parse()
            .map_err(|_| fail("seconds are not a number"))?;

        minutes
            .checked_mul(60)
            .and_then(|secs| secs.checked_add(seconds))
            .map(TimeOffset)
            .ok_or_else(|| fail("offset is too large"))
    }
}

impl FromStr for TimeOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOffset::parse(s)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
