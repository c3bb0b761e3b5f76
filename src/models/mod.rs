pub mod coordinates;
pub mod vet;
