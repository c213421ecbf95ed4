pub mod common_errors;
pub mod connection_protocol;
pub mod constants;
pub mod logger;
pub mod serializer;
pub mod service_messages;
