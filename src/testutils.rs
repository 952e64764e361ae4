use crate::backend::SheetBackend;
use crate::types::{Requester, Reservation, SyncState};
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

pub struct MockSheetBackendInner {
    pub fetch_success: AtomicBool,
    pub push_success: AtomicBool,
    pub calls_to_fetch_all: AtomicU64,
    pub calls_to_push_create: AtomicU64,
    /// What the next fetch_all returns when it succeeds.
    pub remote_reservations: Mutex<Vec<Reservation>>,
    /// Every reservation a successful push_create received.
    pub pushed: Mutex<Vec<Reservation>>,
}

#[derive(Clone)]
pub struct MockSheetBackend(pub Arc<MockSheetBackendInner>);

impl MockSheetBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockSheetBackendInner {
            fetch_success: AtomicBool::new(true),
            push_success: AtomicBool::new(true),
            calls_to_fetch_all: AtomicU64::default(),
            calls_to_push_create: AtomicU64::default(),
            remote_reservations: Mutex::default(),
            pushed: Mutex::default(),
        }))
    }
}

impl SheetBackend for MockSheetBackend {
    async fn fetch_all(&self) -> Result<Vec<Reservation>, String> {
        self.0.calls_to_fetch_all.fetch_add(1, Ordering::SeqCst);
        if !self.0.fetch_success.load(Ordering::SeqCst) {
            return Err("Supposed to fail".into());
        }
        Ok(self.0.remote_reservations.lock().unwrap().clone())
    }

    async fn push_create(&self, reservation: &Reservation) -> Result<(), String> {
        self.0.calls_to_push_create.fetch_add(1, Ordering::SeqCst);
        if !self.0.push_success.load(Ordering::SeqCst) {
            return Err("Supposed to fail".into());
        }
        self.0.pushed.lock().unwrap().push(reservation.clone());
        Ok(())
    }
}

pub fn example_reservation(id: i64, room_id: &str, date: &str, times: &[&str]) -> Reservation {
    Reservation {
        id,
        room_id: room_id.to_string(),
        room_name: format!("Room {room_id}"),
        date: date.to_string(),
        times: times.iter().map(|time| time.to_string()).collect(),
        user: Requester {
            name: "Stefan".into(),
            email: "stefan@example.com".into(),
        },
        created_at: "2025-03-09T12:00:00+01:00".into(),
        sync: SyncState::Pending,
    }
}
