//! PokéAPI client library
//!
//! A small async client for the PokéAPI list endpoints, used by the picker UI.

pub mod error;
pub mod model;

mod client;

pub use client::*;
pub use error::ApiError;
pub use model::NamedResource;
pub use model::PokemonPage;
