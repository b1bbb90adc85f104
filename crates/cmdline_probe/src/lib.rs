mod address;
pub use address::{AddressError, PortAddress};

mod kind;
pub use kind::Kind;

mod config;
pub use config::Config;

mod arguments;
pub use arguments::ProbeArguments;

mod logging;
pub use logging::{init_logger, log_filter};

#[cfg(test)]
mod tests;
