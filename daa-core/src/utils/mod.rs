//! A collection of various utility helpers.

mod error;
pub use self::error::*;

mod random;
pub use self::random::*;

mod telemetry;
pub use self::telemetry::*;

mod timing;
pub use self::timing::Timer;
