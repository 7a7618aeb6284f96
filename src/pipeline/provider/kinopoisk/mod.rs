pub mod api_types;
mod provider;

pub use provider::KinopoiskProvider;
