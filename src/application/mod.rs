//! Application layer: the provider registry, the by-name facade in front of
//! it, and the checkout service that uses the providers it builds.

pub mod checkout;
pub mod providers;
pub mod registry;
