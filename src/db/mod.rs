//! Postgres persistence: schema, bulk load, and transactional commit of
//! espionage resolutions.

mod commit;
mod load;
mod migrate;

pub use commit::{CommitError, Committed, commit, fetch_dominion, fetch_info_op, fetch_info_op_kinds};
pub use load::load_world;
pub use migrate::migrate;
