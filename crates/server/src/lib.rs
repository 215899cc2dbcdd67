pub mod errors;
pub mod extract;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{build_app, connect_and_migrate, run};
pub use state::ServerState;
