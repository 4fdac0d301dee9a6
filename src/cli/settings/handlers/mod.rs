//! Setting handlers for the configuration keys.

pub mod timeout;
pub mod url;

pub use timeout::*;
pub use url::*;
