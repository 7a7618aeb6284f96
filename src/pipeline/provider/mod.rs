mod http;
pub mod kinopoisk;
pub mod unofficial;

pub use http::HttpClient;
pub use kinopoisk::KinopoiskProvider;
pub use unofficial::UnofficialProvider;
