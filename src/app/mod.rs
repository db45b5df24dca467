// Application layer: the API surface (models and services) built on the domain layer.

pub mod models;
pub mod services;
