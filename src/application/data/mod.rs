mod log_level;
mod outline_format;

pub use log_level::LogLevel;
pub use outline_format::OutlineFormat;
