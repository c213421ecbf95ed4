/// Id de cliente que se reporta si no se indica otro
pub const DEFAULT_CLIENT_ID: &str = "myclientid";

pub const DEFAULT_CAPSULE_TYPE: &str = "ristretto";

/// Lectura de sensores que envia el cliente en cada chequeo de estado
pub const REFERENCE_WATER_TEMPERATURE: f32 = 7.0;
pub const REFERENCE_CONNECTED_SECONDS: i64 = 8;
pub const REFERENCE_CAPSULE_PRESSURE: f32 = 9.0;
