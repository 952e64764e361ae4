use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requester {
    pub name: String,
    pub email: String,
}

/// Client-side sync tag for a reservation. Never serialized; the sheet only
/// ever sees the plain record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Pending,
    Confirmed,
    Reverted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: i64,
    /// Stored as a string; the sheet returns it either as a number or a
    /// string depending on how the row was written.
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub room_id: String,
    pub room_name: String,
    /// Calendar day as "YYYY-MM-DD", compared by exact string equality.
    pub date: String,
    /// Half-hour slot tokens ("HH:MM"). Contiguity is enforced at selection
    /// time, not re-validated here.
    pub times: Vec<String>,
    pub user: Requester,
    pub created_at: String,
    #[serde(skip)]
    pub sync: SyncState,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => number.to_string(),
        NumberOrString::String(string) => string,
    })
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => Ok(number),
        NumberOrString::String(string) => string.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_room_id_from_number_and_string() {
        let from_number: Reservation = serde_json::from_str(
            r#"{"id":1700000000000,"roomId":1,"roomName":"Room A","date":"2025-03-10",
                "times":["09:00"],"user":{"name":"Stefan","email":"stefan@example.com"},
                "createdAt":"2025-03-09T12:00:00+01:00"}"#,
        )
        .unwrap();
        let from_string: Reservation = serde_json::from_str(
            r#"{"id":"1700000000000","roomId":"1","roomName":"Room A","date":"2025-03-10",
                "times":["09:00"],"user":{"name":"Stefan","email":"stefan@example.com"},
                "createdAt":"2025-03-09T12:00:00+01:00"}"#,
        )
        .unwrap();

        assert_eq!(from_number, from_string);
        assert_eq!(from_number.room_id, "1");
        assert_eq!(from_number.id, 1700000000000);
        assert_eq!(from_number.sync, SyncState::Pending);
    }

    #[test]
    fn serialize_keeps_sync_tag_off_the_wire() {
        let reservation = Reservation {
            id: 42,
            room_id: "2".into(),
            room_name: "Room B".into(),
            date: "2025-03-10".into(),
            times: vec!["09:00".into(), "09:30".into()],
            user: Requester {
                name: "Stefan".into(),
                email: "stefan@example.com".into(),
            },
            created_at: "2025-03-09T12:00:00+01:00".into(),
            sync: SyncState::Confirmed,
        };

        let json = serde_json::to_string(&reservation).unwrap();
        assert!(json.contains(r#""roomId":"2""#));
        assert!(json.contains(r#""createdAt""#));
        assert!(!json.contains("sync"));
        assert!(!json.contains("Confirmed"));
    }
}
