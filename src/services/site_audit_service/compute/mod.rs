pub mod extract;
pub mod regime;
pub mod score;

pub use score::compute_aggregate;
