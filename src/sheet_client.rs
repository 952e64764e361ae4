use crate::backend::SheetBackend;
use crate::types::Reservation;
use reqwest::multipart::Form;
use tracing::debug;

/// HTTP client for the Apps-Script spreadsheet endpoint. Reads are a plain
/// unauthenticated GET returning a JSON array; writes are a multipart form
/// with an `action` discriminator and the reservation serialized into the
/// `data` field, which is how the script expects its rows.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: reqwest::Client,
    script_url: String,
}

impl SheetClient {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            script_url: script_url.into(),
        }
    }
}

impl SheetBackend for SheetClient {
    async fn fetch_all(&self) -> Result<Vec<Reservation>, String> {
        let response = self
            .client
            .get(&self.script_url)
            .send()
            .await
            .map_err(|err| format!("{err} Failed to reach the reservation sheet"))?;

        let body = response
            .text()
            .await
            .map_err(|err| format!("{err} Failed to read the sheet response"))?;

        let reservations: Vec<Reservation> = serde_json::from_str(&body)
            .map_err(|err| format!("{err} Sheet response was not a reservation list"))?;
        debug!(count = reservations.len(), "fetched reservations from sheet");
        Ok(reservations)
    }

    async fn push_create(&self, reservation: &Reservation) -> Result<(), String> {
        let payload = serde_json::to_string(reservation)
            .map_err(|err| format!("{err} Failed to serialize the reservation"))?;

        let form = Form::new().text("action", "create").text("data", payload);
        let response = self
            .client
            .post(&self.script_url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| format!("{err} Failed to send the reservation to the sheet"))?;

        if !response.status().is_success() {
            return Err(format!(
                "Sheet rejected the reservation with status {}",
                response.status()
            ));
        }
        debug!(id = reservation.id, "reservation sent to sheet");
        Ok(())
    }
}
