pub mod error;
pub mod handlers;
pub mod id_extractor;
pub mod middleware;
pub mod payload;
pub mod routes;

pub use error::*;
pub use handlers::*;
pub use id_extractor::*;
pub use routes::*;
