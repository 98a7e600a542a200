//! UTC calendar arithmetic for vesting windows.
//!
//! Adding k months keeps the time of day and clamps the day of month to the
//! target month's length (Jan 31 + 1 month = Feb 28/29), always counted from
//! the original start so clamping never drifts.

use crate::constants::{MAX_RELEASE_UNITS_PER_MONTH, SECONDS_PER_DAY};
use crate::error::TreasuryError;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const EPOCH_SHIFT_DAYS: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarTime {
    pub year: i64,
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
    pub second_of_day: i64,
}

/// A contiguous release window: `[start, start + duration)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseWindow {
    pub start: i64,
    pub duration: i64,
}

impl CalendarTime {
    pub fn from_unix(ts: i64) -> Result<Self, TreasuryError> {
        if ts < 0 {
            return Err(TreasuryError::InvalidTimestamp);
        }
        let (year, month, day) = civil_from_days(ts.div_euclid(SECONDS_PER_DAY));
        Ok(Self {
            year,
            month,
            day,
            second_of_day: ts.rem_euclid(SECONDS_PER_DAY),
        })
    }

    pub fn to_unix(self) -> Result<i64, TreasuryError> {
        if !(0..SECONDS_PER_DAY).contains(&self.second_of_day)
            || self.day == 0
            || self.day > days_in_month(self.year, self.month)?
        {
            return Err(TreasuryError::InvalidTimestamp);
        }
        days_from_civil(self.year, self.month, self.day)
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|s| s.checked_add(self.second_of_day))
            .ok_or(TreasuryError::MathOverflow)
    }

    pub fn plus_months(self, months: u32) -> Result<Self, TreasuryError> {
        let index = self
            .year
            .checked_mul(12)
            .and_then(|m| m.checked_add(self.month as i64 - 1 + months as i64))
            .ok_or(TreasuryError::MathOverflow)?;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        Ok(Self {
            year,
            month,
            day: self.day.min(days_in_month(year, month)?),
            second_of_day: self.second_of_day,
        })
    }
}

/// Timestamp of `start_ts` shifted by `months` calendar months.
pub fn add_months(start_ts: i64, months: u32) -> Result<i64, TreasuryError> {
    CalendarTime::from_unix(start_ts)?.plus_months(months)?.to_unix()
}

/// Largest `k <= cap` with `now_ts >= add_months(start_ts, k)`.
pub fn months_between(now_ts: i64, start_ts: i64, cap: u32) -> Result<u32, TreasuryError> {
    if now_ts < start_ts {
        return Err(TreasuryError::InvalidTimestamp);
    }
    let start = CalendarTime::from_unix(start_ts)?;
    let mut elapsed = 0;
    while elapsed < cap && start.plus_months(elapsed + 1)?.to_unix()? <= now_ts {
        elapsed += 1;
    }
    Ok(elapsed)
}

/// Splits `months` calendar months from `start_ts` into `units_per_month`
/// windows each. The first window starts at `start_ts` and the last one ends
/// exactly at `add_months(start_ts, months)`.
pub fn release_windows(
    start_ts: i64,
    months: u32,
    units_per_month: u8,
) -> Result<Vec<ReleaseWindow>, TreasuryError> {
    if units_per_month == 0 || units_per_month > MAX_RELEASE_UNITS_PER_MONTH {
        return Err(TreasuryError::InvalidConfig);
    }
    let start = CalendarTime::from_unix(start_ts)?;
    let units = units_per_month as i64;
    let mut windows = Vec::with_capacity(months as usize * units_per_month as usize);
    let mut month_start = start_ts;
    for k in 1..=months {
        let month_end = start.plus_months(k)?.to_unix()?;
        let month_len = month_end - month_start;
        let mut unit_start = month_start;
        for j in 1..=units {
            let unit_end = month_start + month_len * j / units;
            windows.push(ReleaseWindow {
                start: unit_start,
                duration: unit_end - unit_start,
            });
            unit_start = unit_end;
        }
        month_start = month_end;
    }
    Ok(windows)
}

fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

fn days_in_month(year: i64, month: u32) -> Result<u32, TreasuryError> {
    Ok(match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => return Err(TreasuryError::InvalidTimestamp),
    })
}

// Era-based civil calendar conversion (H. Hinnant). Years are counted from
// March so the leap day falls at the end of the year.

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month_from_march = (month as i64 + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT_DAYS
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let shifted = days + EPOCH_SHIFT_DAYS;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_from_march + 2) / 5 + 1) as u32;
    let month = ((month_from_march + 2) % 12 + 1) as u32;
    let year = era * 400 + year_of_era + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}
