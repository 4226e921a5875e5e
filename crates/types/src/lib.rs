pub mod dependency;
pub mod tag;

pub use dependency::{DeliveryMode, Dependency, DependencyKind};
pub use tag::TagKind;
