pub mod client;
pub mod request;
pub mod response;

pub use crate::domain::ports::HttpExecutor;
pub use crate::utils::error::Result;
