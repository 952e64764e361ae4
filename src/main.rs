use crate::app::BookingApp;
use crate::calendar::google_calendar_link;
use crate::configuration::Configuration;
use crate::configuration_handler::ConfigurationHandler;
use crate::sheet_client::SheetClient;
use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod calendar;
mod configuration;
mod configuration_handler;
mod local_reservations;
mod sheet_client;
mod slots;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let configuration = ConfigurationHandler;
    let backend = SheetClient::new(configuration.script_url());
    let app = BookingApp::new(backend, configuration);

    let report = app.refresh().await;
    info!(
        reservations = app.reservations().len(),
        reverted = report.reverted.len(),
        "initial sheet refresh done"
    );

    let today = Local::now().format("%Y-%m-%d").to_string();
    let slots = app.time_slots();
    for room in app.rooms() {
        let free = slots
            .iter()
            .filter(|slot| !app.is_booked(slot, room.id, &today))
            .count();
        info!(
            room = %room.name,
            capacity = room.capacity,
            free = free,
            total = slots.len(),
            "availability for {today}"
        );
    }

    let reservations = app.reservations();
    if let Some(latest) = reservations.first() {
        if let Some(link) = google_calendar_link(latest) {
            info!(id = latest.id, "calendar link for the latest reservation: {link}");
        }
    }
}
