pub mod audit;
pub mod compute;
pub mod lighthouse;
pub mod provider;
pub mod visibility;

#[cfg(test)]
pub mod testing;

pub use audit::run_site_audit;
pub use lighthouse::PageSpeedClient;
pub use provider::{PageQualityProvider, VisibilityProvider};
pub use visibility::SerpApiClient;
