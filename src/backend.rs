use crate::types::Reservation;
use std::future::Future;

/// Remote reservation store. The real implementation talks to the
/// spreadsheet endpoint; tests substitute a mock.
pub trait SheetBackend: Clone + Send + Sync + 'static {
    /// Reads the complete reservation list. The caller decides how to
    /// soften a failure.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Reservation>, String>> + Send;

    /// Appends one reservation to the remote store and reports whether the
    /// request went through. There is no remote update or delete.
    fn push_create(
        &self,
        reservation: &Reservation,
    ) -> impl Future<Output = Result<(), String>> + Send;
}
