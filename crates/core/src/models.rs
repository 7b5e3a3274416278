pub mod event;
pub mod response;
pub mod time_slot;
