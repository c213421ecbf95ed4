use lib::constants::{DEFAULT_HOST, DEFAULT_PORT};

use crate::constants::{DEFAULT_CAPSULE_TYPE, DEFAULT_CLIENT_ID};
use crate::errors::CoffeeClientError;

#[derive(Debug, PartialEq, Eq)]
pub struct ClientArgs {
    pub client_id: String,
    pub capsule_type: String,
    pub host: String,
    pub port: u16,
}

impl ClientArgs {
    /// Argumentos posicionales, todos opcionales: [CLIENT_ID] [CAPSULE_TYPE] [HOST] [PORT]
    pub fn parse(args: &[String]) -> Result<ClientArgs, CoffeeClientError> {
        let arg_or = |index: usize, default: &str| {
            args.get(index)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        let port = match args.get(3) {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| CoffeeClientError::ArgsFormat)?,
            None => DEFAULT_PORT,
        };
        Ok(ClientArgs {
            client_id: arg_or(0, DEFAULT_CLIENT_ID),
            capsule_type: arg_or(1, DEFAULT_CAPSULE_TYPE),
            host: arg_or(2, DEFAULT_HOST),
            port,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn should_use_defaults_without_args() {
        let args = ClientArgs::parse(&[]).unwrap();
        assert_eq!(
            ClientArgs {
                client_id: "myclientid".to_string(),
                capsule_type: "ristretto".to_string(),
                host: "localhost".to_string(),
                port: 50051,
            },
            args
        );
        assert_eq!("localhost:50051", args.server_addr());
    }

    #[test]
    fn should_override_defaults_in_order() {
        let args = ClientArgs::parse(&to_args(&["c1", "lungo"])).unwrap();
        assert_eq!("c1", args.client_id);
        assert_eq!("lungo", args.capsule_type);
        assert_eq!("localhost", args.host);

        let args = ClientArgs::parse(&to_args(&["c1", "lungo", "10.0.0.7", "6000"])).unwrap();
        assert_eq!("10.0.0.7:6000", args.server_addr());
    }

    #[test]
    fn should_return_format_error_on_non_numeric_port() {
        let result = ClientArgs::parse(&to_args(&["c1", "lungo", "localhost", "port"]));
        assert_eq!(Err(CoffeeClientError::ArgsFormat), result);
    }
}
