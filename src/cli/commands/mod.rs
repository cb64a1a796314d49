//! CLI command implementations

pub mod config;
pub mod extract;
pub mod info;
pub mod lookup;
pub mod update;

pub use config::execute as config;
pub use extract::execute as extract;
pub use info::execute as info;
pub use lookup::execute as lookup;
pub use update::execute as update;
