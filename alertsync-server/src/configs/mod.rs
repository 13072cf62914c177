mod settings;

pub use settings::{Logger, Retention, Server, Settings};
