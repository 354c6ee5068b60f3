//! Domain models with validation at construction
//!
//! Raw request input is turned into these types before any store access.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod reading;
pub mod page;
pub mod secret;

pub use validation::ValidationError;
pub use reading::{NewReading, TemperatureReading, TemperatureReadingPayload};
pub use page::{Page, PageParams};
pub use secret::SecretKey;
