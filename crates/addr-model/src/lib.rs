pub mod components;
pub mod config;
pub mod error;
pub mod record;
pub mod rules;

pub use components::{AddressComponents, CanonicalAddress};
pub use config::{DEFAULT_NULL_TOKEN, RunConfig};
pub use error::{AddressError, Result};
pub use record::{CONSUMED_FIELDS, RawAddressRecord, REQUIRED_FIELDS, field};
pub use rules::CleanupRule;
