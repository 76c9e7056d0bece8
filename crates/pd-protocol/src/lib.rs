pub mod health;
pub mod info;
pub mod routes;
pub mod welcome;

pub use health::*;
pub use info::*;
pub use welcome::*;
