use std::time::Duration;
use clap::Parser;

#[derive(Parser, Clone)]
#[clap(name = "petpal-vets", about = "Look up veterinary clinics near a coordinate")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// Base URL of the PetPal API, e.g. http://localhost:8000
    #[clap(env, long)]
    pub api_url: String,

    /// Bearer token attached to outgoing requests
    #[clap(env, long, hide_env_values = true)]
    pub auth_token: Option<String>,

    #[clap(env, long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[clap(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[clap(long, allow_negative_numbers = true)]
    pub lng: f64,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
