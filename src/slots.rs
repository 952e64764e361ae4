//! Availability engine: slot grid generation, conflict checks and
//! contiguous range selection over the static half-hour slot sequence.
//!
//! Slot tokens are zero-padded "HH:MM" strings, so lexicographic order is
//! identical to chronological order and plain string comparison is a valid
//! total order for range logic.

use crate::types::Reservation;
use std::collections::BTreeSet;

/// Half-hour marks for every hour in `[start_hour, end_hour)`.
pub fn generate_time_slots(start_hour: u32, end_hour: u32) -> Vec<String> {
    let mut slots = Vec::new();
    for hour in start_hour..end_hour {
        slots.push(format!("{hour:02}:00"));
        slots.push(format!("{hour:02}:30"));
    }
    slots
}

/// True iff some reservation occupies `slot` for the given room and day.
/// Room identity is compared by value; `room_id` rows written as numbers or
/// strings are normalized on deserialization.
pub fn is_booked(slot: &str, room_id: i64, date: &str, reservations: &[Reservation]) -> bool {
    let room_id = room_id.to_string();
    reservations.iter().any(|reservation| {
        reservation.room_id == room_id
            && reservation.date == date
            && reservation.times.iter().any(|time| time == slot)
    })
}

/// Applies one slot click to the current selection.
///
/// A booked candidate is a no-op. An empty selection becomes the candidate
/// alone. A candidate already in the selection is toggled off. Any other
/// candidate extends the selection to the full inclusive range between the
/// lowest and highest slot of selection-plus-candidate; if that range
/// crosses a booked slot the selection collapses to the candidate alone
/// instead of failing.
pub fn select_slot(
    selection: &BTreeSet<String>,
    candidate: &str,
    slot_sequence: &[String],
    is_booked: impl Fn(&str) -> bool,
) -> BTreeSet<String> {
    if is_booked(candidate) {
        return selection.clone();
    }

    if selection.is_empty() {
        return BTreeSet::from([candidate.to_string()]);
    }

    if selection.contains(candidate) {
        let mut shrunk = selection.clone();
        shrunk.remove(candidate);
        return shrunk;
    }

    let low = selection
        .first()
        .map(String::as_str)
        .unwrap_or(candidate)
        .min(candidate);
    let high = selection
        .last()
        .map(String::as_str)
        .unwrap_or(candidate)
        .max(candidate);

    let start = slot_sequence.iter().position(|slot| slot == low);
    let end = slot_sequence.iter().position(|slot| slot == high);
    let (Some(start), Some(end)) = (start, end) else {
        return BTreeSet::from([candidate.to_string()]);
    };

    let range = &slot_sequence[start..=end];
    if range.iter().any(|slot| is_booked(slot)) {
        return BTreeSet::from([candidate.to_string()]);
    }
    range.iter().cloned().collect()
}

/// Display string "start - end" for a slot set, where the end is the last
/// selected slot plus 30 minutes. Empty input yields an empty string.
pub fn format_time_range(slots: &[String]) -> String {
    let mut sorted: Vec<&str> = slots.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let (Some(start), Some(last)) = (sorted.first(), sorted.last()) else {
        return String::new();
    };
    match end_of_slot(last) {
        Some(end) => format!("{start} - {end}"),
        None => String::new(),
    }
}

/// "HH:MM" -> (hours, minutes). None for anything malformed.
pub(crate) fn parse_slot(slot: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = slot.split_once(':')?;
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Exclusive upper bound of a slot: its start plus 30 minutes, with minute
/// overflow normalized into the next hour.
fn end_of_slot(slot: &str) -> Option<String> {
    let (hours, minutes) = parse_slot(slot)?;
    let minutes = minutes + 30;
    let (hours, minutes) = (hours + minutes / 60, minutes % 60);
    Some(format!("{hours:02}:{minutes:02}"))
}
