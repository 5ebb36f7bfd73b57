#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

//! This crate provides the [`Timezone`] and [`TimeChangeRule`] structs, which can be used to
//! convert between Coordinated Universal Time (UTC) and a local time observing Daylight
//! Saving Time (DST).
//!
//! It is aimed at embedded and other resource-constrained environments where a full time zone
//! database is unavailable. A time zone is described by two rules, one for the start of DST
//! and one for the start of standard time, each selecting an ordinal occurrence of a week day
//! within a month ("second Sunday in March at 02:00") and carrying the UTC offset in effect
//! while its regime applies. The exact change instants are derived on demand for the year of
//! each converted timestamp and cached, so repeated conversions in the same year are cheap.
//!
//! Timestamps are Unix times in seconds. The crate performs no allocation, never reads the
//! current time and is `no_std` when the default `std` feature is disabled.
//!
//! # Usage
//!
//! ## Conversions
//!
//! ```rust
//! # fn main() -> Result<(), tzrule::RuleError> {
//!     use tzrule::{RuleKind, TimeChangeRule, Timezone};
//!
//!     // US Eastern Time: DST starts on the second Sunday in March at 02:00 (UTC-4),
//!     // standard time starts on the first Sunday in November at 02:00 (UTC-5)
//!     let edt = TimeChangeRule::new(2, 1, 3, 2, -240)?;
//!     let est = TimeChangeRule::new(1, 1, 11, 2, -300)?;
//!     let mut eastern = Timezone::new(edt, est);
//!
//!     // 2024-07-04T16:00:00Z -> 2024-07-04T12:00:00-04:00
//!     let unix_time = 1720108800;
//!     let local = eastern.to_local(unix_time);
//!     assert_eq!(local, unix_time - 4 * 3600);
//!     assert!(eastern.is_dst_at_utc(unix_time));
//!     assert_eq!(eastern.to_utc(local), unix_time);
//!
//!     // Check which rule was applied
//!     let (_local, kind) = eastern.to_local_with_rule(unix_time);
//!     assert_eq!(kind, RuleKind::Dst);
//!     assert_eq!(eastern.rule(kind).utc_offset(), -240);
//! # Ok(())
//! # }
//! ```
//!
//! ## Persistence
//!
//! Rule pairs can be stored in and restored from a fixed-size blob, e.g. in EEPROM or flash:
//!
//! ```rust
//! # fn main() -> Result<(), tzrule::RuleError> {
//!     use tzrule::{TimeChangeRule, Timezone};
//!
//!     let cest = TimeChangeRule::new(0, 1, 3, 2, 120)?;
//!     let cet = TimeChangeRule::new(0, 1, 10, 3, 60)?;
//!     let central_european = Timezone::new(cest, cet);
//!
//!     let bytes = central_european.to_bytes();
//!     assert_eq!(Timezone::from_bytes(bytes)?, central_european);
//! # Ok(())
//! # }
//! ```

mod constants;
mod datetime;
mod error;
mod rule;
mod timezone;

pub use error::RuleError;
pub use rule::TimeChangeRule;
pub use timezone::{RuleKind, Timezone};
