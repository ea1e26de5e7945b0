use crate::constants::{
    DINNER_END_MINUTE, DINNER_START_MINUTE, LUNCH_END_MINUTE, LUNCH_START_MINUTE,
    MEAL_OVERLAP_THRESHOLD_MINUTES,
};
use crate::models::{OpeningHoursEntry, TimeRange};
use time::{Duration, OffsetDateTime, Weekday};

/// Parses `"HH:MM"` into `(hour, minute)`. Malformed input falls back to
/// midnight rather than erroring, matching the upstream enrichment data's
/// occasional garbage strings.
pub fn parse_time(s: &str) -> (u32, u32) {
    let mut parts = s.splitn(2, ':');
    let hour = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.parse::<u32>().ok());
    match (hour, minute) {
        (Some(h), Some(m)) if h < 24 && m < 60 => (h, m),
        _ => (0, 0),
    }
}

pub fn time_to_minutes(s: &str) -> u32 {
    let (h, m) = parse_time(s);
    h * 60 + m
}

fn minute_of_day(t: OffsetDateTime) -> u32 {
    t.hour() as u32 * 60 + t.minute() as u32
}

fn english_weekday_name(d: Weekday) -> &'static str {
    match d {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

fn entry_for(hours: &[OpeningHoursEntry], t: OffsetDateTime) -> Option<&OpeningHoursEntry> {
    let day = english_weekday_name(t.weekday());
    hours.iter().find(|e| e.day == day)
}

/// That weekday's opening-hours entry, cloned for echoing back to a caller.
pub fn day_entry(hours: &[OpeningHoursEntry], t: OffsetDateTime) -> Option<OpeningHoursEntry> {
    entry_for(hours, t).cloned()
}

/// A range covering `minute`, inclusive on both ends.
fn covering_range<'a>(entry: &'a OpeningHoursEntry, minute: u32) -> Option<&'a TimeRange> {
    entry.ranges.iter().find(|r| {
        let start = time_to_minutes(&r.start);
        let end = time_to_minutes(&r.end);
        start <= minute && minute <= end
    })
}

/// Whether a POI with the given opening hours is open at `t`.
///
/// No opening-hours data at all means always open; a day with no matching
/// entry means closed. These are deliberately different defaults, matching
/// the asymmetry in the data this crate ingests.
pub fn is_open_at(hours: &[OpeningHoursEntry], t: OffsetDateTime) -> bool {
    if hours.is_empty() {
        return true;
    }
    match entry_for(hours, t) {
        None => false,
        Some(entry) => covering_range(entry, minute_of_day(t)).is_some(),
    }
}

/// Extends [`is_open_at`] with the requirement that the matching range stay
/// open for at least `stay_minutes` past arrival. Never true when arrival
/// itself isn't covered by a range.
pub fn has_enough_time_to_stay(hours: &[OpeningHoursEntry], arrival: OffsetDateTime, stay_minutes: u32) -> bool {
    if hours.is_empty() {
        return true;
    }
    let Some(entry) = entry_for(hours, arrival) else {
        return false;
    };
    let arrival_minute = minute_of_day(arrival);
    match covering_range(entry, arrival_minute) {
        Some(range) => {
            let end = time_to_minutes(&range.end);
            end as i64 - arrival_minute as i64 >= stay_minutes as i64
        }
        None => false,
    }
}

/// Whether `[t1, t2]` overlaps any open range on any calendar date in that
/// span, checking each date's weekday entry independently.
pub fn overlaps_with_window(hours: &[OpeningHoursEntry], t1: OffsetDateTime, t2: OffsetDateTime) -> bool {
    if hours.is_empty() {
        return true;
    }
    if t2 < t1 {
        return false;
    }

    let mut date = t1.date();
    let last_date = t2.date();
    loop {
        let weekday = english_weekday_name(date.weekday());
        if let Some(entry) = hours.iter().find(|e| e.day == weekday) {
            for range in &entry.ranges {
                let (sh, sm) = parse_time(&range.start);
                let (eh, em) = parse_time(&range.end);
                let range_start = date
                    .with_hms(sh as u8, sm as u8, 0)
                    .map(|t| t.assume_offset(t1.offset()));
                let range_end = date
                    .with_hms(eh as u8, em as u8, 0)
                    .map(|t| t.assume_offset(t1.offset()));
                if let (Ok(range_start), Ok(range_end)) = (range_start, range_end) {
                    let overlap_start = t1.max(range_start);
                    let overlap_end = t2.min(range_end);
                    if overlap_start < overlap_end {
                        return true;
                    }
                }
            }
        }
        if date == last_date {
            break;
        }
        date = date.next_day().expect("date within representable range");
    }
    false
}

/// Overlap, in minutes, between `[start, start+budget_minutes]` and the
/// window `[window_start_minute, window_end_minute]` on the same calendar day.
fn overlap_minutes(start: OffsetDateTime, budget_minutes: u32, window_start_minute: u32, window_end_minute: u32) -> i64 {
    let day_start = start.replace_hour(0).unwrap().replace_minute(0).unwrap().replace_second(0).unwrap();
    let window_start = day_start + Duration::minutes(window_start_minute as i64);
    let window_end = day_start + Duration::minutes(window_end_minute as i64);
    let budget_end = start + Duration::minutes(budget_minutes as i64);

    let overlap_start = start.max(window_start);
    let overlap_end = budget_end.min(window_end);
    (overlap_end - overlap_start).whole_minutes().max(0)
}

/// True when `[start, start+budget_minutes]` overlaps the lunch or dinner
/// window by at least [`MEAL_OVERLAP_THRESHOLD_MINUTES`].
pub fn needs_restaurant_for_window(start: OffsetDateTime, budget_minutes: u32) -> bool {
    let lunch = overlap_minutes(start, budget_minutes, LUNCH_START_MINUTE, LUNCH_END_MINUTE);
    let dinner = overlap_minutes(start, budget_minutes, DINNER_START_MINUTE, DINNER_END_MINUTE);
    lunch >= MEAL_OVERLAP_THRESHOLD_MINUTES || dinner >= MEAL_OVERLAP_THRESHOLD_MINUTES
}
