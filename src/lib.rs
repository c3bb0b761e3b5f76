//! Client for the PetPal "nearby vets" endpoint.
//!
//! [`VetLookupClient`] builds the request and decodes the reply. Sending it is
//! left to a [`Transport`]; [`AuthInterceptor`] decorates a transport with the
//! bearer token.

pub mod client;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod transport;

pub use client::VetLookupClient;
pub use errors::VetsError;
pub use models::coordinates::Coordinates;
pub use models::vet::VetRecord;
pub use transport::{AuthInterceptor, GetRequest, ReqwestTransport, StaticToken, TokenProvider, Transport, TransportResponse};
