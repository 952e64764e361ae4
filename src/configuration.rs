use crate::types::Room;

pub trait Configuration: Clone + Send + Sync + 'static {
    /// First bookable hour of the day.
    fn start_hour(&self) -> u32;
    /// First hour past the operating window; the last slot starts 30
    /// minutes before it.
    fn end_hour(&self) -> u32;
    fn script_url(&self) -> String;
    fn admin_password(&self) -> String;
    fn initial_rooms(&self) -> Vec<Room>;
}
