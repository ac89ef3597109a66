//! Plant tracker domain library.
//!
//! Zero internal dependencies. Holds the domain model, the merge-update
//! logic, payload validation, the error taxonomy, and the clock abstraction
//! shared by the repository and API layers.

pub mod clock;
pub mod error;
pub mod plant;
pub mod roles;
pub mod types;
pub mod validation;
