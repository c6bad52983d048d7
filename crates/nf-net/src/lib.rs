//! Reaction network topology and stoichiometry.
//!
//! Provides:
//! - `Reaction`: canonicalized stoichiometry plus an injected rate law
//! - `ReactionNetwork`: validated, immutable network with its
//!   stoichiometry matrix
//! - `NetworkBuilder`: incremental name-keyed construction
//! - baryon-number conservation checks

pub mod builder;
pub mod conservation;
pub mod error;
pub mod network;
pub mod reaction;

pub use builder::NetworkBuilder;
pub use conservation::{DEFAULT_CONSERVATION_TOL, check_baryon_conservation, conservation_residuals};
pub use error::{NetError, NetResult};
pub use network::ReactionNetwork;
pub use reaction::Reaction;
