pub mod pagespeed;

pub use pagespeed::PageSpeedClient;
