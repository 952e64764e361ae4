use crate::configuration::Configuration;
use crate::types::Room;

#[derive(Clone)]
pub struct ConfigurationHandler;

impl Configuration for ConfigurationHandler {
    fn start_hour(&self) -> u32 {
        9
    }

    fn end_hour(&self) -> u32 {
        18
    }

    fn script_url(&self) -> String {
        "https://script.google.com/macros/s/AKfycbwpIIbXc6Xwws6rt4gMcZsDLG8rpPtMSr49l6ZLJfCpZrXOzQdYU9ff_fyHKGyJadE-/exec".into()
    }

    fn admin_password(&self) -> String {
        // Not a secret; the admin view only hides destructive buttons.
        "admin123".into()
    }

    fn initial_rooms(&self) -> Vec<Room> {
        vec![
            Room {
                id: 1,
                name: "Large Conference Room A".into(),
                capacity: 10,
            },
            Room {
                id: 2,
                name: "Small Meeting Room B".into(),
                capacity: 4,
            },
            Room {
                id: 3,
                name: "Project Room C".into(),
                capacity: 6,
            },
        ]
    }
}
