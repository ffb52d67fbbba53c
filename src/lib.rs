pub mod config;
pub mod error;
pub mod noise;
pub mod process;
pub mod swap;

pub use config::RunConfig;
pub use error::NoiseError;
pub use noise::NoiseConfig;
