use crate::types::{Reservation, SyncState};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The single mutable owner of the client-visible reservation list.
#[derive(Debug, Clone, Default)]
pub struct LocalReservations {
    reservations: Arc<Mutex<HashMap<i64, Reservation>>>,
}

/// Outcome of one reconciliation pass: which pending entries the remote
/// read confirmed, and which local entries it no longer contained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub confirmed: Vec<i64>,
    pub reverted: Vec<i64>,
}

impl LocalReservations {
    /// Optimistic insert: the reservation becomes visible immediately,
    /// tagged `Pending` until a later reconcile settles it.
    pub fn insert_pending(&self, mut reservation: Reservation) {
        reservation.sync = SyncState::Pending;
        let mut reservations = self.reservations.lock().unwrap();
        reservations.insert(reservation.id, reservation);
    }

    /// Makes the remote set the entire visible set and reports the diff.
    ///
    /// Every remote record ends up tagged `Confirmed`. Local entries absent
    /// from the remote read are dropped and reported as reverted, pending
    /// ones included; an empty remote list therefore clears everything.
    pub fn reconcile(&self, remote: Vec<Reservation>) -> ReconcileReport {
        let mut reservations = self.reservations.lock().unwrap();
        let mut report = ReconcileReport::default();

        for (id, local) in reservations.iter() {
            if !remote.iter().any(|reservation| reservation.id == *id) {
                report.reverted.push(*id);
            } else if local.sync == SyncState::Pending {
                report.confirmed.push(*id);
            }
        }

        reservations.clear();
        for mut reservation in remote {
            reservation.sync = SyncState::Confirmed;
            reservations.insert(reservation.id, reservation);
        }

        report.confirmed.sort_unstable();
        report.reverted.sort_unstable();
        report
    }

    /// Removes the local copy only. The remote row, if any, stays behind.
    pub fn remove(&self, id: i64) -> Result<(), String> {
        let mut reservations = self.reservations.lock().unwrap();
        if reservations.remove(&id).is_none() {
            return Err("Reservation does not exist and can therefore not be removed".into());
        }
        Ok(())
    }

    /// Display order: newest creation timestamp first, id as tiebreaker.
    pub fn snapshot(&self) -> Vec<Reservation> {
        let mut list: Vec<Reservation> = self
            .reservations
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        list
    }
}
