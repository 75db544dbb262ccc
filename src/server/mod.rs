pub mod router;
pub mod routes;

pub use router::{SpendlensState, spendlens_router};
