// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time slot canonicalization.
//!
//! A time slot is the label of a period within a day. Labels that encode a
//! clock range (`9:00-10:00`, `9 am - 10.30 am`, `14:00 to 15:00`) are
//! rewritten to the canonical `HH:MM-HH:MM` form so that two spellings of
//! the same period compare equal. Labels that encode a single clock time
//! become `HH:MM`, provided they carry minutes, an am/pm marker or the
//! four-digit `HHMM` form, so a bare `2` stays a period number. Anything
//! else (`"Period 1"`, `"Lab block"`, `"2"`) is kept as written, with
//! whitespace collapsed, matches other labels without regard to case, and
//! orders after every timed slot.

use crate::error::DomainError;
use crate::types::collapse_whitespace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::Time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// A canonicalized time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeSlot {
    label: String,
    key: String,
    start: Option<Time>,
    end: Option<Time>,
}

impl TimeSlot {
    /// Parses and canonicalizes a time slot label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyTimeSlot` if nothing remains after trimming.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let label: String = collapse_whitespace(value);
        if label.is_empty() {
            return Err(DomainError::EmptyTimeSlot);
        }

        let unified: String = label
            .replace(['\u{2012}', '\u{2013}', '\u{2014}'], "-")
            .to_lowercase()
            .replace(" to ", "-");

        if let Some((left, right)) = unified.split_once('-') {
            if let (Some(start), Some(end)) = (parse_clock(left), parse_clock(right)) {
                let start_time: Time = resolve_start(start, end);
                let end_time: Time = end.0;
                return Ok(Self::timed(
                    format!("{}-{}", format_clock(start_time), format_clock(end_time)),
                    start_time,
                    Some(end_time),
                ));
            }
        } else if !is_bare_hour(&unified)
            && let Some((start, _)) = parse_clock(&unified)
        {
            return Ok(Self::timed(format_clock(start), start, None));
        }

        Ok(Self {
            key: label.to_lowercase(),
            label,
            start: None,
            end: None,
        })
    }

    fn timed(label: String, start: Time, end: Option<Time>) -> Self {
        Self {
            key: label.clone(),
            label,
            start: Some(start),
            end,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the matching key: the label, case-folded.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the parsed start time, if the label encodes one.
    #[must_use]
    pub const fn start(&self) -> Option<Time> {
        self.start
    }

    /// Returns the parsed end time, if the label encodes a range.
    #[must_use]
    pub const fn end(&self) -> Option<Time> {
        self.end
    }

    /// Returns the length of the slot in minutes when it encodes a forward range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_minutes(&self) -> Option<u32> {
        let (start, end) = (self.start?, self.end?);
        if end <= start {
            return None;
        }
        Some((end - start).whole_minutes() as u32)
    }
}

impl PartialEq for TimeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TimeSlot {}

impl std::hash::Hash for TimeSlot {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSlot {
    // Timed slots first, by start time; untimed slots after, by key.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start.is_none(), self.start, &self.key).cmp(&(
            other.start.is_none(),
            other.start,
            &other.key,
        ))
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// A lone one- or two-digit number names a period, not an hour.
fn is_bare_hour(value: &str) -> bool {
    !value.is_empty() && value.len() <= 2 && value.chars().all(|c| c.is_ascii_digit())
}

fn format_clock(value: Time) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}

/// A start without its own am/pm marker borrows the end's marker, unless
/// that would place it after the end (`11-1 pm` starts at 11:00).
fn resolve_start(start: (Time, Option<Meridiem>), end: (Time, Option<Meridiem>)) -> Time {
    let (start_time, start_meridiem) = start;
    let (end_time, end_meridiem) = end;

    if start_meridiem.is_none()
        && let Some(meridiem) = end_meridiem
        && let Some(borrowed) = apply_meridiem(start_time.hour(), start_time.minute(), meridiem)
        && borrowed <= end_time
    {
        return borrowed;
    }
    start_time
}

fn apply_meridiem(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Time> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour: u8 = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) | (Meridiem::Pm, h @ 12) => h,
        (Meridiem::Pm, h) => h + 12,
    };
    Time::from_hms(hour, minute, 0).ok()
}

/// Parses one side of a slot: `9`, `09:00`, `9.30`, `0930`, `9am`, `9:30 p.m.`.
fn parse_clock(value: &str) -> Option<(Time, Option<Meridiem>)> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    let (digits, meridiem): (&str, Option<Meridiem>) =
        if let Some(rest) = strip_any(&compact, &["a.m.", "am"]) {
            (rest, Some(Meridiem::Am))
        } else if let Some(rest) = strip_any(&compact, &["p.m.", "pm"]) {
            (rest, Some(Meridiem::Pm))
        } else {
            (compact.as_str(), None)
        };

    let (hour_text, minute_text): (&str, &str) = match digits.split_once([':', '.']) {
        Some((hour, minute)) => (hour, minute),
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "0"),
    };

    if hour_text.is_empty()
        || hour_text.len() > 2
        || minute_text.len() > 2
        || !hour_text.chars().all(|c| c.is_ascii_digit())
        || !minute_text.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let hour: u8 = hour_text.parse().ok()?;
    let minute: u8 = minute_text.parse().ok()?;

    let time: Time = match meridiem {
        Some(m) => apply_meridiem(hour, minute, m)?,
        None => Time::from_hms(hour, minute, 0).ok()?,
    };
    Some((time, meridiem))
}

fn strip_any<'a>(value: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suffix| value.strip_suffix(suffix))
}
