pub mod priority;
pub mod projection;
pub mod registry;
pub mod tenancy;
