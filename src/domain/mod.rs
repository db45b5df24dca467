// Domain layer: the raw-JSON model machinery and ports (interfaces).

pub mod api_enum;
pub mod ports;
pub mod raw;
pub mod record;
pub mod union;
