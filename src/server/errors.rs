#[derive(Debug, PartialEq, Eq)]
pub enum ServerError {
    /// No se pudo abrir el listener en el puerto pedido
    ListenerError,
    AcceptError,
    /// El puerto recibido por argumento no es un numero valido
    ArgsFormat,
}
