pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod pagination;
pub mod sampler;
pub mod types;

pub use client::DiscogsClient;
pub use config::Config;
pub use error::{DiscogsError, Result};
