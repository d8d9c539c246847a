pub mod domain;
pub mod error;
pub mod extract;
pub mod layers;
pub mod resources;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod xml;
