use crate::slots::parse_slot;
use crate::types::Reservation;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Deep link that opens a prefilled Google Calendar event for the
/// reservation: title and location from the room, start/end from the slot
/// range (end is the last slot plus 30 minutes), requester in the details.
/// None if the reservation has no slots or a malformed date.
pub fn google_calendar_link(reservation: &Reservation) -> Option<String> {
    let mut times: Vec<&str> = reservation.times.iter().map(String::as_str).collect();
    times.sort_unstable();
    let first = *times.first()?;
    let last = *times.last()?;

    let date = NaiveDate::parse_from_str(&reservation.date, "%Y-%m-%d").ok()?;
    let (start_hours, start_minutes) = parse_slot(first)?;
    let (end_hours, end_minutes) = parse_slot(last)?;
    let start = slot_datetime(date, start_hours, start_minutes)?;
    let end = slot_datetime(date, end_hours, end_minutes + 30)?;

    let title = format!("Meeting room booking: {}", reservation.room_name);
    let details = format!(
        "Booked by: {}\nEmail: {}",
        reservation.user.name, reservation.user.email
    );

    Some(format!(
        "{CALENDAR_RENDER_URL}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        urlencoding::encode(&title),
        compact_utc(start),
        compact_utc(end),
        urlencoding::encode(&details),
        urlencoding::encode(&reservation.room_name),
    ))
}

/// Local wall time of a slot on the given day, converted to UTC. Minute
/// overflow rolls into the hour, hour overflow into the next day.
fn slot_datetime(date: NaiveDate, hours: u32, minutes: u32) -> Option<DateTime<Utc>> {
    let hours = hours + minutes / 60;
    let minutes = minutes % 60;
    let date = match hours {
        0..=23 => date,
        _ => date.succ_opt()?,
    };
    let naive = date.and_hms_opt(hours % 24, minutes, 0)?;
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|datetime| datetime.with_timezone(&Utc))
}

/// Compact UTC timestamp without punctuation, e.g. 20250310T090000Z.
fn compact_utc(datetime: DateTime<Utc>) -> String {
    datetime.format("%Y%m%dT%H%M%SZ").to_string()
}
