//! Domain model (locations, predicates, error events, manifests, ...).

pub mod activity;
pub mod app_error;
pub mod errors;
pub mod location;
pub mod manifest;
pub mod registration;

pub use self::activity::{ActivityPredicate, always_active, prefix};
pub use self::app_error::AppError;
pub use self::errors::{ConfigError, LoadError, ManifestError, PublishError, RegistrationError};
pub use self::location::Location;
pub use self::manifest::PublishManifest;
pub use self::registration::{LazyModule, LoadedModule, Registration};
