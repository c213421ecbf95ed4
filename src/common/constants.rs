/// Puerto en el que escucha el servicio si no se indica otro
pub const DEFAULT_PORT: u16 = 50051;

/// Host al que se conecta el cliente por defecto
pub const DEFAULT_HOST: &str = "localhost";

/// Delimitador de fin de mensaje en el stream TCP
pub const FRAME_DELIMITER: u8 = b'\n';
