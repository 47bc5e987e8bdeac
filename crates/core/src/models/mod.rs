pub mod activity;
pub mod blocked;
pub mod clock;
pub mod day;
pub mod location;
pub mod time_slot;
