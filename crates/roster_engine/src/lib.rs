//! Roster engine: remote fetch and snapshot publication.
mod decode;
mod fetch;
mod publisher;

pub use decode::{decode_items, DecodeError};
pub use fetch::{
    FetchError, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL, DEFAULT_RESOURCE_PATH,
};
pub use publisher::{RefreshOutcome, RosterObserver, RosterPublisher};
