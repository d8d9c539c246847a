mod log;

pub use log::{LogLayer, LogService};
