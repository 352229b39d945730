pub mod convex_hull;
pub mod normalize;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;
#[doc(inline)]
pub use normalize::{normalize, validate_points};
