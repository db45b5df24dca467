//! Client SDK for the payments, vault, workflows, agents and legal research API.
//!
//! Every model keeps the JSON it was built from in an ordered map, reads typed
//! values lazily, and only checks its shape when [`Validate::validate`] is called.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::models;
pub use app::services;
pub use config::ClientConfig;
pub use crate::core::client::ApiClient;
pub use crate::core::request::HttpRequest;
pub use crate::core::response::{HttpResponse, RawResponse};
pub use domain::ports::HttpExecutor;
pub use domain::raw::{FieldState, RawData};
pub use domain::record::RawRecord;
pub use domain::union::Union;
pub use utils::error::{Result, SdkError};
pub use utils::validation::Validate;

#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
