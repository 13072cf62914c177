mod control_service;
mod device_state_service;
mod event_log_service;
mod sync_service;

pub use control_service::*;
pub use device_state_service::*;
pub use event_log_service::*;
pub use sync_service::*;
