//! Rate coefficient evaluation for reaction networks.
//!
//! Provides:
//! - the `RateEvaluator` trait, the seam through which all rate physics
//!   enters the network
//! - reference rate laws: constant, Arrhenius, seven-coefficient REACLIB
//!   fit, and tabulated rates with linear interpolation

pub mod arrhenius;
pub mod constant;
pub mod error;
pub mod evaluator;
pub mod reaclib;
pub mod table;

pub use arrhenius::ArrheniusRate;
pub use constant::ConstantRate;
pub use error::{RateError, RateResult};
pub use evaluator::RateEvaluator;
pub use reaclib::ReaclibRate;
pub use table::TabulatedRate;
