mod download_request;
mod fixture;
mod greeting;

pub use download_request::{DownloadRequest, DownloadSegment};
pub use fixture::{Fixture, FixtureRoot, Subitems, FIXTURE};
pub use greeting::{Greeting, HelloRequest};
