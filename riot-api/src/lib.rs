//! Asynchronous League of Legends API wrapper.
//!
//! The library offers thin wrappers around the official REST endpoints. Every
//! call returns the upstream JSON verbatim as a [`types::Payload`], which can be
//! walked with dotted paths.

pub mod api;
pub mod region;
pub mod types;

pub use api::{LolApiClient, LolApiFull};
pub use region::Platform;
pub use types::{Payload, RiotApiError, RiotApiResponse};
