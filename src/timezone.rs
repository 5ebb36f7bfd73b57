//! Conversion between UTC and local time, with lazily cached yearly time change instants.

use crate::constants::SECONDS_PER_MINUTE;
use crate::datetime::year_of_unix_time;
use crate::error::RuleError;
use crate::rule::TimeChangeRule;

/// Tag identifying which time change rule a conversion applied
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RuleKind {
    /// The Daylight Saving Time rule
    Dst,
    /// The standard time rule
    Standard,
}

/// Time change instants resolved for one calendar year
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Transitions {
    /// Calendar year the instants were resolved for
    year: i32,
    /// Start of Daylight Saving Time, as a UTC instant
    dst_utc: i64,
    /// Start of standard time, as a UTC instant
    std_utc: i64,
    /// Start of Daylight Saving Time, as a local clock reading
    dst_local: i64,
    /// Start of standard time, as a local clock reading
    std_local: i64,
}

/// Converter between UTC and a local time observing Daylight Saving Time
///
/// A `Timezone` owns two [`TimeChangeRule`] values and resolves them to absolute change
/// instants for the year of each converted timestamp. The resolved instants are cached and
/// recomputed only when a conversion falls in a different year, so repeated conversions in
/// the same year are cheap.
///
/// Conversion methods take `&mut self` because of this internal cache; a `Timezone` instance
/// must not be shared between threads without external synchronization.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Timezone {
    /// Rule for the start of Daylight Saving Time
    dst_rule: TimeChangeRule,
    /// Rule for the start of standard time
    std_rule: TimeChangeRule,
    /// Cached time change instants, absent until the first conversion
    transitions: Option<Transitions>,
}

impl Timezone {
    /// Size in bytes of an encoded rule pair
    pub const ENCODED_LEN: usize = 2 * TimeChangeRule::ENCODED_LEN;

    /// Construct a time zone from the rules for the start of Daylight Saving Time and the
    /// start of standard time.
    ///
    /// A time zone not observing DST is described by two identical rules.
    pub const fn new(dst_rule: TimeChangeRule, std_rule: TimeChangeRule) -> Self {
        Self { dst_rule, std_rule, transitions: None }
    }

    /// Replace both rules.
    ///
    /// Cached time change instants are discarded and recomputed on the next conversion.
    pub fn set_rules(&mut self, dst_rule: TimeChangeRule, std_rule: TimeChangeRule) {
        self.dst_rule = dst_rule;
        self.std_rule = std_rule;
        self.transitions = None;
    }

    /// Returns copies of the DST rule and the standard time rule
    pub const fn rules(&self) -> (TimeChangeRule, TimeChangeRule) {
        (self.dst_rule, self.std_rule)
    }

    /// Returns a copy of the requested rule
    pub const fn rule(&self, kind: RuleKind) -> TimeChangeRule {
        match kind {
            RuleKind::Dst => self.dst_rule,
            RuleKind::Standard => self.std_rule,
        }
    }

    /// Convert a UTC instant to a local clock reading
    pub fn to_local(&mut self, utc: i64) -> i64 {
        self.to_local_with_rule(utc).0
    }

    /// Convert a UTC instant to a local clock reading, also returning which rule was applied
    pub fn to_local_with_rule(&mut self, utc: i64) -> (i64, RuleKind) {
        let kind = if self.is_dst_at_utc(utc) { RuleKind::Dst } else { RuleKind::Standard };
        (utc + self.rule(kind).utc_offset() as i64 * SECONDS_PER_MINUTE, kind)
    }

    /// Convert a local clock reading to a UTC instant.
    ///
    /// Local clock readings around the time changes are ambiguous. When DST starts, one hour
    /// of local time never occurs: such a reading produces a deterministic but incorrect
    /// result. When standard time starts, one hour of local time occurs twice: such a reading
    /// is always resolved as the earlier occurrence, i.e. with the DST offset. No error is
    /// raised in either case.
    pub fn to_utc(&mut self, local: i64) -> i64 {
        let kind = if self.is_dst_at_local(local) { RuleKind::Dst } else { RuleKind::Standard };
        local - self.rule(kind).utc_offset() as i64 * SECONDS_PER_MINUTE
    }

    /// Check whether a UTC instant falls within the Daylight Saving Time interval
    pub fn is_dst_at_utc(&mut self, utc: i64) -> bool {
        let transitions = self.refreshed(year_of_unix_time(utc));
        is_dst(transitions.dst_utc, transitions.std_utc, utc)
    }

    /// Check whether a local clock reading falls within the Daylight Saving Time interval
    pub fn is_dst_at_local(&mut self, local: i64) -> bool {
        let transitions = self.refreshed(year_of_unix_time(local));
        is_dst(transitions.dst_local, transitions.std_local, local)
    }

    /// Encode the rule pair as a fixed-size blob, suitable for a byte-level storage medium
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut bytes = [0; Self::ENCODED_LEN];
        bytes[..TimeChangeRule::ENCODED_LEN].copy_from_slice(&self.dst_rule.to_bytes());
        bytes[TimeChangeRule::ENCODED_LEN..].copy_from_slice(&self.std_rule.to_bytes());
        bytes
    }

    /// Decode a time zone from a fixed-size rule pair blob, validating every field
    pub fn from_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Result<Self, RuleError> {
        let [w0, d0, m0, h0, o0, o1, w1, d1, m1, h1, o2, o3] = bytes;

        let dst_rule = TimeChangeRule::from_bytes([w0, d0, m0, h0, o0, o1])?;
        let std_rule = TimeChangeRule::from_bytes([w1, d1, m1, h1, o2, o3])?;

        Ok(Self::new(dst_rule, std_rule))
    }

    /// Returns the cached time change instants, recomputing them if the provided year differs
    /// from the cached year
    fn refreshed(&mut self, year: i32) -> Transitions {
        match self.transitions {
            Some(transitions) if transitions.year == year => transitions,
            _ => {
                let transitions = self.resolve_transitions(year);
                self.transitions = Some(transitions);
                transitions
            }
        }
    }

    /// Resolve both rules to the four time change instants for the provided year.
    ///
    /// Each change is anchored to the offset regime in effect immediately before it: the DST
    /// start is a standard time clock reading and the standard time start is a DST clock
    /// reading, hence the crossed offsets.
    fn resolve_transitions(&self, year: i32) -> Transitions {
        let dst_local = self.dst_rule.transition_instant(year);
        let std_local = self.std_rule.transition_instant(year);

        let dst_utc = dst_local - self.std_rule.utc_offset() as i64 * SECONDS_PER_MINUTE;
        let std_utc = std_local - self.dst_rule.utc_offset() as i64 * SECONDS_PER_MINUTE;

        Transitions { year, dst_utc, std_utc, dst_local, std_local }
    }
}

/// Check whether an instant falls within the Daylight Saving Time interval delimited by the
/// provided change instants, all expressed in the same domain (UTC or local).
///
/// When standard time starts after DST within the calendar year, the DST interval is the
/// contiguous one. Otherwise DST spans the year end and the standard time interval is the
/// contiguous one, so the test is inverted. Coincident change instants mean DST is not
/// observed.
fn is_dst(dst_start: i64, std_start: i64, instant: i64) -> bool {
    if std_start == dst_start {
        false
    } else if std_start > dst_start {
        dst_start <= instant && instant < std_start
    } else {
        !(std_start <= instant && instant < dst_start)
    }
}
