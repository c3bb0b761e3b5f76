pub mod vet_lookup;

pub use vet_lookup::{VetLookupClient, NEARBY_VETS_PATH};
