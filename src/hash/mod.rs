//! Hash primitives and the name-keyed registry that selects them.
//!
//! One selected algorithm is applied uniformly to every record of a run.
//! Inputs reach the dispatch only as [`HashInput`] values, so the set of
//! supported shapes is closed at the type level.

mod algorithm;
mod input;
mod registry;

pub use algorithm::HashAlgorithm;
pub use input::HashInput;
pub use registry::HashRegistry;
