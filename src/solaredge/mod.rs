pub mod client;
mod fetcher;
mod query;

pub use client::ReqwestClient;
pub use fetcher::{EnergyFetcher, RawArtifact};
pub use query::{EnergyQuery, TimeUnit};
