/// Cantidad de capsulas con la que arranca (y se repone) la cafetera
pub const FULL_SUPPLY: usize = 10;

/// A partir de este stock, inclusive, se repone la cafetera
pub const LOW_SUPPLY_MARK: usize = 5;

pub const NO_RESUPPLY_NOTE: &str = "No need, yet";

pub const NEXT_PROVISION_DATE: &str = "11 of november of 2019";

/// Diagnostico fijo que devuelve el evaluador actual
pub const STUB_ISSUE_DESCRIPTION: &str = "whatever";
pub const STUB_TECHNICIAN_ETA: &str = "yesterday";

/// Interfaz en la que escucha el servidor
pub const LISTEN_HOST: &str = "0.0.0.0";
