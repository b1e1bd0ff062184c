pub mod handlers;
pub mod models;
pub mod provider_client;
pub mod routes;

pub use provider_client::{ProviderClient, TournamentCatalog};
