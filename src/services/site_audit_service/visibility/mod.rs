pub mod serpapi;

pub use serpapi::SerpApiClient;
