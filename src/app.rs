use crate::backend::SheetBackend;
use crate::configuration::Configuration;
use crate::local_reservations::{LocalReservations, ReconcileReport};
use crate::slots;
use crate::types::{Requester, Reservation, Room, SyncState};
use chrono::Local;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

/// Wait between sending a reservation to the sheet and re-reading it. The
/// script needs a moment to append the row before a read reflects it.
pub const RECONCILE_DELAY: Duration = Duration::from_secs(2);

/// Application state owner. All mutations go through the operations below;
/// cloning shares the same underlying state.
#[derive(Clone)]
pub struct BookingApp<B: SheetBackend, C: Configuration> {
    backend: B,
    configuration: C,
    rooms: Arc<Mutex<Vec<Room>>>,
    reservations: LocalReservations,
}

impl<B: SheetBackend, C: Configuration> BookingApp<B, C> {
    pub fn new(backend: B, configuration: C) -> Self {
        let rooms = configuration.initial_rooms();
        Self {
            backend,
            configuration,
            rooms: Arc::new(Mutex::new(rooms)),
            reservations: LocalReservations::default(),
        }
    }

    pub fn time_slots(&self) -> Vec<String> {
        slots::generate_time_slots(self.configuration.start_hour(), self.configuration.end_hour())
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.lock().unwrap().clone()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.snapshot()
    }

    pub fn is_booked(&self, slot: &str, room_id: i64, date: &str) -> bool {
        slots::is_booked(slot, room_id, date, &self.reservations.snapshot())
    }

    /// One slot click against the current local view of the room/day grid.
    pub fn select_slot(
        &self,
        selection: &BTreeSet<String>,
        candidate: &str,
        room_id: i64,
        date: &str,
    ) -> BTreeSet<String> {
        let sequence = self.time_slots();
        let reservations = self.reservations.snapshot();
        slots::select_slot(selection, candidate, &sequence, |slot| {
            slots::is_booked(slot, room_id, date, &reservations)
        })
    }

    /// Full read from the sheet. A failed or unparseable read degrades to
    /// an empty visible list rather than surfacing an error; the warning in
    /// the log is the only trace.
    pub async fn refresh(&self) -> ReconcileReport {
        let remote = match self.backend.fetch_all().await {
            Ok(remote) => remote,
            Err(err) => {
                warn!("{err}; showing an empty reservation list");
                Vec::new()
            }
        };

        let report = self.reservations.reconcile(remote);
        if !report.reverted.is_empty() {
            warn!(
                reverted = ?report.reverted,
                "reservations no longer present on the sheet"
            );
        }
        report
    }

    /// Submits a booking. An empty selection is a silent no-op. Otherwise
    /// the reservation is visible locally right away, and the sheet write
    /// plus delayed re-read runs in the background.
    pub fn book(
        &self,
        room: &Room,
        date: &str,
        selection: &BTreeSet<String>,
        name: &str,
        email: &str,
    ) -> Option<Reservation> {
        if selection.is_empty() {
            return None;
        }

        let now = Local::now();
        let reservation = Reservation {
            id: now.timestamp_millis(),
            room_id: room.id.to_string(),
            room_name: room.name.clone(),
            date: date.to_string(),
            times: selection.iter().cloned().collect(),
            user: Requester {
                name: name.to_string(),
                email: email.to_string(),
            },
            created_at: now.to_rfc3339(),
            sync: SyncState::Pending,
        };
        self.reservations.insert_pending(reservation.clone());
        info!(id = reservation.id, room = %reservation.room_name, "reservation created locally");

        let app = self.clone();
        let pending = reservation.clone();
        tokio::spawn(async move {
            app.push_and_reconcile(pending).await;
        });

        Some(reservation)
    }

    /// Sends the reservation to the sheet, waits out the fixed delay and
    /// re-reads. A failed write is logged and otherwise left to the re-read
    /// to reveal; there is no retry.
    pub async fn push_and_reconcile(&self, reservation: Reservation) -> ReconcileReport {
        if let Err(err) = self.backend.push_create(&reservation).await {
            warn!(id = reservation.id, "{err}; the next refresh will show whether it persisted");
        }
        tokio::time::sleep(RECONCILE_DELAY).await;
        self.refresh().await
    }

    /// Removes the local copy only. The sheet row has to be deleted by
    /// hand; callers are expected to confirm this with the operator.
    pub fn delete_reservation(&self, id: i64) -> Result<(), String> {
        self.reservations.remove(id)
    }

    pub fn add_room(&self, name: &str, capacity: u32) -> Room {
        let room = Room {
            id: Local::now().timestamp_millis(),
            name: name.to_string(),
            capacity,
        };
        self.rooms.lock().unwrap().push(room.clone());
        room
    }

    pub fn remove_room(&self, id: i64) -> Result<(), String> {
        let mut rooms = self.rooms.lock().unwrap();
        let count_before = rooms.len();
        rooms.retain(|room| room.id != id);
        if rooms.len() == count_before {
            return Err("Room does not exist and can therefore not be removed".into());
        }
        Ok(())
    }

    pub fn verify_admin_password(&self, attempt: &str) -> bool {
        attempt == self.configuration.admin_password()
    }
}
