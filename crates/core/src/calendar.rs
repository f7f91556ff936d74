//! Calendar projection: every allocation becomes a concrete event in the
//! current week, using fixed shift time windows.
//!
//! A line whose day or shift is not a recognized value produces no event. This
//! is logged, not raised.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};
use tracing::warn;

use crate::models::enums::{Day, Shift};
use crate::models::grid::{CalendarEvent, CalendarLine};

fn at(hour: i64, minute: i64) -> NaiveTime {
    NaiveTime::MIN + Duration::hours(hour) + Duration::minutes(minute)
}

/// Start and end time of a shift.
pub fn shift_window(shift: Shift) -> (NaiveTime, NaiveTime) {
    match shift {
        Shift::Morning => (at(8, 0), at(11, 30)),
        Shift::Afternoon => (at(14, 0), at(17, 30)),
        Shift::Night => (at(19, 0), at(22, 0)),
    }
}

pub fn shift_color(shift: Shift) -> &'static str {
    match shift {
        Shift::Morning => "#3DD56D",
        Shift::Afternoon => "#FFC107",
        Shift::Night => "#FF4B4B",
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Projects lines into the week containing `today`.
pub fn project<I>(lines: I, today: NaiveDate) -> Vec<CalendarEvent>
where
    I: IntoIterator<Item = CalendarLine>,
{
    let monday = week_start(today);

    lines
        .into_iter()
        .filter_map(|line| {
            let (day, shift) = match (line.day.parse::<Day>(), line.shift.parse::<Shift>()) {
                (Ok(day), Ok(shift)) => (day, shift),
                _ => {
                    warn!(
                        allocation_id = %line.allocation_id,
                        day = %line.day,
                        shift = %line.shift,
                        "no calendar slot for allocation"
                    );
                    return None;
                }
            };

            let date = monday + Duration::days(day.offset_from_monday());
            let (start, end) = shift_window(shift);

            Some(CalendarEvent {
                allocation_id: line.allocation_id,
                title: format!("{} | {}", line.room_name, line.instructor_name),
                start: date.and_time(start),
                end: date.and_time(end),
                resource_id: line.room_name,
                instructor: line.instructor_name,
                discipline: line.discipline_name,
                capacity: line.room_capacity,
                color: shift_color(shift).to_string(),
            })
        })
        .collect()
}

/// Projects lines into the current local week.
pub fn project_current_week<I>(lines: I) -> Vec<CalendarEvent>
where
    I: IntoIterator<Item = CalendarLine>,
{
    project(lines, Local::now().date_naive())
}
