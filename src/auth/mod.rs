pub mod credentials;
pub(crate) mod extractors;
pub mod password;
pub mod services;

pub use services::Identity;
