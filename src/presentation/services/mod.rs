pub mod event_bus;
pub mod log_capture;

pub use event_bus::{AppEvent, EventBus};
pub use log_capture::init_log_capture;
