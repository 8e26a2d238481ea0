pub mod error;
pub mod record;
pub mod roster;

pub use error::FetchError;
pub use record::Record;
pub use roster::Roster;
