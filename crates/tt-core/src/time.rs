//! Time-of-day and elapsed-time model.
//!
//! # Design
//!
//! A [`Clock`] is a time of day on a single, wrapping 24-hour dial:
//!
//!   second carries into minute, minute carries into hour,
//!   hour wraps modulo 24 (the overflowing day is dropped, not counted)
//!
//! There is deliberately no date component.  Two clocks that differ by a
//! whole number of days compare equal, which is what a one-day timetable
//! wants.
//!
//! A [`JourneyDuration`] is the elapsed time attached to a segment (or the
//! fixed interchange penalty of a transfer).  It is always stored normalized
//! (`seconds < 60`), so applying it to a clock never depends on the order in
//! which the components are added.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::CoreError;

const SECS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;

// ── Clock ─────────────────────────────────────────────────────────────────────

/// A wraparound time of day with second resolution.
///
/// Invariant: `hour < 24`, `minute < 60`, `second < 60` after every
/// operation.  `Clock` is `Copy`; the `add_*` methods mutate in place, while
/// `+ JourneyDuration` returns a fresh value and leaves the operand alone.
///
/// Ordering is lexicographic on `(hour, minute, second)` (field order).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    hour:   u8,
    minute: u8,
    second: u8,
}

impl Clock {
    pub const MIDNIGHT: Clock = Clock { hour: 0, minute: 0, second: 0 };

    /// Build a clock from in-range components, or `None` if any is out of
    /// range.
    pub const fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Clock> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Clock { hour: hour as u8, minute: minute as u8, second: second as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    #[inline]
    pub fn second(self) -> u32 {
        self.second as u32
    }

    /// Seconds elapsed since 00:00:00 on the same dial (`0..86_400`).
    pub fn seconds_since_midnight(self) -> u32 {
        self.hour() * 3_600 + self.minute() * 60 + self.second()
    }

    /// Add `n` seconds, carrying whole minutes into [`add_minutes`](Self::add_minutes).
    pub fn add_seconds(&mut self, n: u32) {
        let total = self.second as u64 + n as u64;
        self.second = (total % SECS_PER_MINUTE) as u8;
        self.add_minutes_wide(total / SECS_PER_MINUTE);
    }

    /// Add `n` minutes, carrying whole hours into [`add_hours`](Self::add_hours).
    pub fn add_minutes(&mut self, n: u32) {
        self.add_minutes_wide(n as u64);
    }

    /// Add `n` hours modulo 24.
    pub fn add_hours(&mut self, n: u32) {
        self.add_hours_wide(n as u64);
    }

    /// Apply a journey duration: seconds first, then minutes.
    pub fn add_duration(&mut self, d: JourneyDuration) {
        self.add_seconds(d.seconds());
        self.add_minutes(d.minutes());
    }

    fn add_minutes_wide(&mut self, n: u64) {
        let total = self.minute as u64 + n;
        self.minute = (total % MINUTES_PER_HOUR) as u8;
        self.add_hours_wide(total / MINUTES_PER_HOUR);
    }

    fn add_hours_wide(&mut self, n: u64) {
        self.hour = ((self.hour as u64 + n % HOURS_PER_DAY) % HOURS_PER_DAY) as u8;
    }
}

impl Add<JourneyDuration> for Clock {
    type Output = Clock;

    #[inline]
    fn add(mut self, rhs: JourneyDuration) -> Clock {
        self.add_duration(rhs);
        self
    }
}

impl AddAssign<JourneyDuration> for Clock {
    #[inline]
    fn add_assign(&mut self, rhs: JourneyDuration) {
        self.add_duration(rhs);
    }
}

/// Parses `HH:MM` (seconds = 0) or `HH:MM:SS`.  Components may be one or two
/// digits; out-of-range values are rejected rather than wrapped.
impl FromStr for Clock {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidClock(s.to_owned());
        let mut parts = s.trim().split(':');

        let hour = parse_component(parts.next()).ok_or_else(invalid)?;
        let minute = parse_component(parts.next()).ok_or_else(invalid)?;
        let second = match parts.next() {
            None => 0,
            part => parse_component(part).ok_or_else(invalid)?,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Clock::from_hms(hour, minute, second).ok_or_else(invalid)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

fn parse_component(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// ── JourneyDuration ───────────────────────────────────────────────────────────

/// Elapsed travel time between two stations, or an interchange penalty.
///
/// Always normalized: construction carries `seconds >= 60` into `minutes`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JourneyDuration {
    minutes: u32,
    seconds: u32,
}

impl JourneyDuration {
    pub const ZERO: JourneyDuration = JourneyDuration { minutes: 0, seconds: 0 };

    /// Build a duration from raw components, normalizing the seconds.
    /// Minutes saturate at `u32::MAX`.
    pub const fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes: minutes.saturating_add(seconds / 60),
            seconds: seconds % 60,
        }
    }

    /// Like [`new`](Self::new), but `None` if the carried minutes overflow.
    pub const fn checked_new(minutes: u32, seconds: u32) -> Option<Self> {
        match minutes.checked_add(seconds / 60) {
            Some(minutes) => Some(Self { minutes, seconds: seconds % 60 }),
            None => None,
        }
    }

    pub const fn from_secs(secs: u32) -> Self {
        Self::new(0, secs)
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    /// Remaining seconds, always `< 60`.
    #[inline]
    pub fn seconds(self) -> u32 {
        self.seconds
    }

    pub fn total_secs(self) -> u64 {
        self.minutes as u64 * 60 + self.seconds as u64
    }
}

impl Add for JourneyDuration {
    type Output = JourneyDuration;

    /// Saturates at `u32::MAX` minutes.
    fn add(self, rhs: JourneyDuration) -> JourneyDuration {
        JourneyDuration::new(self.minutes.saturating_add(rhs.minutes), self.seconds + rhs.seconds)
    }
}

/// Parses the `MM:SS` travel-time field of a segment record.
impl FromStr for JourneyDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidDuration(s.to_owned());
        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !digits(minutes) || !digits(seconds) {
            return Err(invalid());
        }
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
        JourneyDuration::checked_new(minutes, seconds).ok_or_else(invalid)
    }
}

impl fmt::Display for JourneyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}
