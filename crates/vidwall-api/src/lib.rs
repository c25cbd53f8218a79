// vidwall-api: Async Rust client for the Event Master JSON-RPC API
// and XML configuration trees.

pub mod client;
pub mod error;
pub mod model;
pub mod rpc;
pub mod transport;
pub mod tree;

mod cache;

pub use client::{Client, ClientOptions};
pub use error::Error;
pub use model::DestinationFilter;
