pub mod format;
pub mod forms;
pub mod notify;
pub mod platform;
pub mod scroll;
