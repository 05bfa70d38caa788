//! Dates, times, time zones and durations with chrono.
//!
//! Demos that depend on "now" take the current date or instant as a
//! parameter; [`report`] reads the clock once and passes it down.

use std::time::{Duration as StdDuration, SystemTime, UNIX_EPOCH};

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, Local, Month, Months, NaiveDate,
    NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::error::TourError;
use crate::output::Report;
use crate::Result;

pub const TITLE: &str = "Date and time - demonstrations";

/// Zone used by the zoned demos.
pub const SAO_PAULO: &str = "America/Sao_Paulo";

/// Millisecond timestamp used by the legacy interop demo.
pub const LEGACY_EPOCH_MILLIS: i64 = 1_700_000_000_000;

const DMY: &str = "%d/%m/%Y";
const DMY_HM: &str = "%d/%m/%Y %H:%M";
const ISO_LOCAL: &str = "%Y-%m-%dT%H:%M:%S";

/// Look up a zone in the tz database.
pub fn zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| TourError::UnknownTimezone(name.to_string()))
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TourError::DateOutOfRange(format!("{year}-{month}-{day}")))
}

fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    date(year, month, day)?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| TourError::DateOutOfRange(format!("{hour}:{minute}")))
}

fn time(hour: u32, minute: u32, second: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| TourError::DateOutOfRange(format!("{hour}:{minute}:{second}")))
}

fn zoned<Z: TimeZone>(dt: &DateTime<Z>, zone_name: &str) -> String
where
    Z::Offset: std::fmt::Display,
{
    format!("{}[{}]", dt.format("%Y-%m-%dT%H:%M:%S%:z"), zone_name)
}

fn utc_iso(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Calendar difference between two dates in years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    /// Whole months are counted first, the remainder in days.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let start_month = start.year() * 12 + start.month0() as i32;
        let end_month = end.year() * 12 + end.month0() as i32;
        let mut total_months = end_month - start_month;
        let mut days = end.day() as i32 - start.day() as i32;

        if total_months > 0 && days < 0 {
            total_months -= 1;
            let anchor = start
                .checked_add_months(Months::new(total_months as u32))
                .ok_or_else(|| TourError::DateOutOfRange(start.to_string()))?;
            days = (end - anchor).num_days() as i32;
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= days_in_month(end.year(), end.month())? as i32;
        }

        Ok(Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        })
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = date(year, month, 1)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| TourError::DateOutOfRange(first.to_string()))?;
    Ok((next - first).num_days() as u32)
}

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let first = date(day.year(), day.month(), 1)?;
    let last = date(day.year(), day.month(), days_in_month(day.year(), day.month())?)?;
    Ok((first, last))
}

/// The next `weekday` strictly after `from`.
pub fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    from + Days::new(u64::from(ahead))
}

/// The next Monday-to-Friday day after `from`.
pub fn next_business_day(from: NaiveDate) -> NaiveDate {
    let skip = match from.weekday() {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        _ => 1,
    };
    from + Days::new(skip)
}

/// Full weekday name in Brazilian Portuguese.
pub fn weekday_name_pt_br(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

pub fn today(today: NaiveDate) -> String {
    format!("Today: {} (ISO) | {}", today, today.format(DMY))
}

pub fn fixed_date() -> Result<String> {
    let d = date(2025, 9, 21)?;
    Ok(format!("NaiveDate::from_ymd_opt(2025, 9, 21) -> {}", d.format(DMY)))
}

pub fn time_now(now: NaiveTime) -> String {
    let now = now.with_nanosecond(0).unwrap_or(now);
    format!("Current time: {now}")
}

pub fn date_time_now(now: NaiveDateTime) -> String {
    format!("Now: {}", now.format(ISO_LOCAL))
}

pub fn fields() -> Result<String> {
    let d = date(2025, 9, 21)?;
    let month = Month::try_from(d.month() as u8)
        .map_err(|_| TourError::DateOutOfRange(d.to_string()))?;
    let weekday = d.weekday();
    Ok(format!(
        "Date: {} | year={}, month={}({}), day={}, weekday={}({})",
        d,
        d.year(),
        month.name(),
        d.month(),
        d.day(),
        d.format("%A"),
        weekday.number_from_monday()
    ))
}

pub fn parse_iso(input: &str) -> Result<String> {
    let d: NaiveDate = input.parse().map_err(|source| TourError::InvalidDate {
        input: input.to_string(),
        source,
    })?;
    Ok(format!("Parse ISO '{}' -> {}", input, d.format(DMY)))
}

pub fn parse_dmy(input: &str) -> Result<String> {
    let d = NaiveDate::parse_from_str(input, DMY).map_err(|source| TourError::InvalidDate {
        input: input.to_string(),
        source,
    })?;
    Ok(format!("Parse dd/mm/yyyy '{input}' -> ISO: {d}"))
}

pub fn format_custom() -> Result<String> {
    let dt = date_time(2024, 1, 5, 14, 30)?;
    Ok(format!("Custom format: {}", dt.format(DMY_HM)))
}

/// pt-BR short date-time style is `dd/MM/yyyy HH:mm`.
pub fn format_pt_br_short() -> Result<String> {
    let dt = date_time(2024, 7, 12, 9, 5)?;
    Ok(format!("pt-BR short: {}", dt.format(DMY_HM)))
}

pub fn date_arithmetic() -> Result<String> {
    let base = date(2025, 9, 21)?;
    let plus = base + Days::new(10);
    let minus = base - Duration::weeks(2);
    let end_of_year = base
        .with_month(12)
        .and_then(|d| d.with_day(31))
        .ok_or_else(|| TourError::DateOutOfRange(base.to_string()))?;
    Ok(format!(
        "Base={base} | +10d={plus} | -2w={minus} | with(12/31)={end_of_year}"
    ))
}

pub fn time_arithmetic() -> Result<String> {
    let t = time(8, 15, 45)?;
    let shifted = t + Duration::hours(2) - Duration::minutes(10);
    let truncated = t
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .ok_or_else(|| TourError::DateOutOfRange(t.to_string()))?;
    Ok(format!("t={t} | +2h-10m={shifted} | trunc={truncated}"))
}

pub fn start_end_of_month(today: NaiveDate) -> Result<String> {
    let (first, last) = month_bounds(today)?;
    Ok(format!("Today={today} | first={first} | last={last}"))
}

pub fn period_between_dates() -> Result<String> {
    let start = date(2020, 5, 10)?;
    let end = date(2025, 9, 21)?;
    let p = Period::between(start, end)?;
    Ok(format!(
        "Between {} and {} -> {} years, {} months, {} days",
        start, end, p.years, p.months, p.days
    ))
}

pub fn duration_between_times() -> Result<String> {
    let a = time(9, 0, 0)?;
    let b = time(14, 45, 30)?;
    let d = b - a;
    Ok(format!(
        "Between {} and {} -> {}h {}m {}s",
        a,
        b,
        d.num_hours(),
        d.num_minutes() % 60,
        d.num_seconds() % 60
    ))
}

pub fn next_friday(today: NaiveDate) -> String {
    format!(
        "Today={} | Next Friday={}",
        today,
        next_weekday(today, Weekday::Fri)
    )
}

pub fn next_business(today: NaiveDate) -> String {
    format!(
        "Today={} | Next business day={}",
        today,
        next_business_day(today)
    )
}

pub fn now_in_zones(now: DateTime<Utc>) -> Result<String> {
    let tz = zone(SAO_PAULO)?;
    let sp = now.with_timezone(&tz);
    Ok(format!("SP: {} | UTC: {}", zoned(&sp, tz.name()), utc_iso(&now)))
}

pub fn local_to_zoned() -> Result<String> {
    let tz = zone(SAO_PAULO)?;
    let ldt = date_time(2025, 9, 21, 10, 0)?;
    let zdt = tz
        .from_local_datetime(&ldt)
        .single()
        .ok_or_else(|| TourError::DateOutOfRange(ldt.to_string()))?;
    Ok(format!(
        "{} @ {} -> {}",
        ldt.format("%Y-%m-%dT%H:%M"),
        tz.name(),
        zoned(&zdt, tz.name())
    ))
}

pub fn fixed_offset() -> Result<String> {
    let offset = FixedOffset::west_opt(3 * 3600)
        .ok_or_else(|| TourError::DateOutOfRange("-03:00".to_string()))?;
    let ldt = date_time(2025, 9, 21, 10, 0)?;
    let odt = offset
        .from_local_datetime(&ldt)
        .single()
        .ok_or_else(|| TourError::DateOutOfRange(ldt.to_string()))?;
    Ok(format!("DateTime<FixedOffset>(-03:00): {}", odt.to_rfc3339()))
}

pub fn epoch_millis(now: DateTime<Utc>) -> String {
    format!("Instant: {} | epoch_millis={}", utc_iso(&now), now.timestamp_millis())
}

/// Convert an instant to São Paulo time and back; the instant is unchanged.
pub fn instant_round_trip(instant: DateTime<Utc>) -> Result<(String, bool)> {
    let tz = zone(SAO_PAULO)?;
    let sp = instant.with_timezone(&tz);
    let back = sp.with_timezone(&Utc);
    Ok((
        format!(
            "Instant->SP->Instant: {} -> {} -> {}",
            utc_iso(&instant),
            zoned(&sp, tz.name()),
            utc_iso(&back)
        ),
        back == instant,
    ))
}

pub fn legacy_to_chrono(millis: i64) -> Result<String> {
    let tz = zone(SAO_PAULO)?;
    let instant = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| TourError::DateOutOfRange(millis.to_string()))?;
    let offset = StdDuration::from_millis(millis.unsigned_abs());
    let system = if millis < 0 {
        UNIX_EPOCH.checked_sub(offset)
    } else {
        UNIX_EPOCH.checked_add(offset)
    }
    .ok_or_else(|| TourError::DateOutOfRange(millis.to_string()))?;
    let from_system = DateTime::<Utc>::from(system);
    let local = instant.with_timezone(&tz).naive_local();
    Ok(format!(
        "millis={} -> Instant={} -> SystemTime agrees={} -> Local@SP={}",
        millis,
        utc_iso(&instant),
        from_system == instant,
        local.format(ISO_LOCAL)
    ))
}

pub fn chrono_to_system_time() -> Result<String> {
    let tz = zone(SAO_PAULO)?;
    let ldt = date_time(2025, 9, 21, 13, 20)?;
    let instant = tz
        .from_local_datetime(&ldt)
        .single()
        .ok_or_else(|| TourError::DateOutOfRange(ldt.to_string()))?
        .with_timezone(&Utc);
    let system: SystemTime = instant.into();
    let secs = system
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TourError::DateOutOfRange(instant.to_string()))?
        .as_secs();
    Ok(format!(
        "Local={} @ SP -> Instant={} -> SystemTime(secs={})",
        ldt.format(ISO_LOCAL),
        utc_iso(&instant),
        secs
    ))
}

pub fn year_month_days(today: NaiveDate) -> Result<String> {
    let feb = days_in_month(2024, 2)?;
    let current = days_in_month(today.year(), today.month())?;
    Ok(format!(
        "YearMonth=2024-02 | days={} | current={} (days={})",
        feb,
        today.format("%Y-%m"),
        current
    ))
}

pub fn month_day_birthday(today: NaiveDate) -> String {
    let birthday = (1, 5);
    let is_today = (today.month(), today.day()) == birthday;
    format!(
        "Birthday=--{:02}-{:02} | Today={} | is it today? {}",
        birthday.0,
        birthday.1,
        today.format("--%m-%d"),
        if is_today { "YES" } else { "no" }
    )
}

pub fn weekday_names() -> Result<String> {
    let d = date(2025, 9, 21)?;
    let weekday = d.weekday();
    Ok(format!(
        "{} is {} (pt-BR) / {} (en-US) | calendar=ISO 8601",
        d,
        weekday_name_pt_br(weekday),
        d.format("%A")
    ))
}

pub fn report() -> Result<Report> {
    let now_local = Local::now();
    let today_date = now_local.date_naive();
    let now_utc = now_local.with_timezone(&Utc);
    let (round_trip, _) = instant_round_trip(now_utc)?;

    Ok(Report::new(TITLE)
        // dates, times, date-times
        .entry("Local::now().date_naive()", today(today_date))
        .entry("Build a specific NaiveDate", fixed_date()?)
        .entry("Local::now().time()", time_now(now_local.time()))
        .entry("Local::now().naive_local()", date_time_now(now_local.naive_local()))
        .entry("Field access (year/month/day)", fields()?)
        // parsing and formatting
        .entry("Parse ISO (%Y-%m-%d)", parse_iso("2025-09-21")?)
        .entry("Parse custom (%d/%m/%Y)", parse_dmy("05/01/2024")?)
        .entry("Custom format", format_custom()?)
        .entry("pt-BR short format", format_pt_br_short()?)
        // arithmetic
        .entry("+ Days / - weeks / with_month", date_arithmetic()?)
        .entry("Shift and truncate a time", time_arithmetic()?)
        .entry("First and last day of month", start_end_of_month(today_date)?)
        // periods and durations
        .entry("Period between dates (y/m/d)", period_between_dates()?)
        .entry("Duration between times (h/m/s)", duration_between_times()?)
        // adjusters
        .entry("Next Friday", next_friday(today_date))
        .entry("Next business day (custom adjuster)", next_business(today_date))
        // zones and offsets
        .entry("Now in São Paulo and UTC", now_in_zones(now_utc)?)
        .entry("NaiveDateTime -> DateTime<Tz>", local_to_zoned()?)
        .entry("DateTime<FixedOffset> (UTC-03:00)", fixed_offset()?)
        // instants
        .entry("Instant now (epoch millis)", epoch_millis(now_utc))
        .entry("Instant <-> DateTime<Tz>", round_trip)
        // std::time interop
        .entry("Epoch millis -> DateTime / SystemTime", legacy_to_chrono(LEGACY_EPOCH_MILLIS)?)
        .entry("NaiveDateTime -> SystemTime", chrono_to_system_time()?)
        // calendar helpers
        .entry("Days in a year-month", year_month_days(today_date)?)
        .entry("Month-day (birthday)", month_day_birthday(today_date))
        .entry("Weekday names (l10n)", weekday_names()?))
}
