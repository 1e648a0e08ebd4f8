pub mod actions;
pub mod config;
pub mod error;
pub mod journal;
pub mod payload;
pub mod reducer;
pub mod router;
pub mod state;
pub mod store;
pub mod uri;

pub use actions::*;
pub use config::Config;
pub use error::*;
pub use journal::*;
pub use reducer::reduce;
pub use router::*;
pub use state::*;
pub use store::*;
