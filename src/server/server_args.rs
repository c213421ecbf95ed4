use lib::constants::DEFAULT_PORT;

use crate::errors::ServerError;

#[derive(Debug, PartialEq, Eq)]
pub struct ServerArgs {
    pub port: u16,
}

impl ServerArgs {
    /// Recibe los argumentos sin el nombre del programa. El unico argumento, opcional, es el puerto.
    pub fn parse(args: &[String]) -> Result<ServerArgs, ServerError> {
        let port = match args.first() {
            Some(port) => port.trim().parse::<u16>().map_err(|_| ServerError::ArgsFormat)?,
            None => DEFAULT_PORT,
        };
        Ok(ServerArgs { port })
    }
}
