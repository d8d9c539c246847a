mod content;
mod echo;
mod file;
mod health_check;
mod hello;
mod index;
mod search;

pub use content::{html, json, text, xml};
pub use echo::echo_request;
pub use file::{download_file, download_file_by_query};
pub use health_check::health_check;
pub use hello::hello;
pub use index::index;
pub use search::search_file;
