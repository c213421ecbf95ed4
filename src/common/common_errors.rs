/// Errores de transporte que pueden surgir al hablar con el servicio de cafe.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConnectionError {
    /// No se pudo establecer la conexion o se corto en medio de un envio/recepcion
    ConnectionLost,
    /// El otro extremo cerro la conexion de forma ordenada
    ConnectionClosed,
    SerializationError,
    /// Llego una respuesta que no corresponde al pedido enviado
    UnexpectedReply,
    UnexpectedError,
}

impl From<serde_json::Error> for ConnectionError {
    fn from(_: serde_json::Error) -> Self {
        ConnectionError::SerializationError
    }
}

impl<T> From<std::sync::PoisonError<T>> for ConnectionError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ConnectionError::UnexpectedError
    }
}

impl From<std::io::Error> for ConnectionError {
    fn from(_: std::io::Error) -> Self {
        ConnectionError::ConnectionLost
    }
}
