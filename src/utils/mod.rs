pub mod environment;
pub mod logging;
pub mod terminal;

pub use environment::{get_api_key, get_log_dir};
pub use logging::{LogTarget, init_tracing};
pub use terminal::sanitize_for_display;
