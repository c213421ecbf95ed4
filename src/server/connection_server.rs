use std::net::SocketAddr;

use async_std::net::TcpListener;
use async_trait::async_trait;

use lib::connection_protocol::{ConnectionProtocol, TcpConnection};
use log::{error, info};

use crate::constants::LISTEN_HOST;
use crate::errors::ServerError;

#[async_trait]
pub trait ConnectionServer {
    async fn listen(&self) -> Result<Box<dyn ConnectionProtocol + Send>, ServerError>;
}

pub struct TcpConnectionServer {
    listener: TcpListener,
}

impl TcpConnectionServer {
    /// Abre el listener en el puerto indicado. Con el puerto 0 el sistema elige uno libre.
    pub async fn new(port: u16) -> Result<TcpConnectionServer, ServerError> {
        let listener = match TcpListener::bind((LISTEN_HOST, port)).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("[SERVER] Error binding to port {}, {}", port, e);
                return Err(ServerError::ListenerError);
            }
        };
        info!("[SERVER] Bind to port {} successful", port);
        Ok(TcpConnectionServer { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener
            .local_addr()
            .map_err(|_| ServerError::ListenerError)
    }
}

#[async_trait]
impl ConnectionServer for TcpConnectionServer {
    async fn listen(&self) -> Result<Box<dyn ConnectionProtocol + Send>, ServerError> {
        match self.listener.accept().await {
            Ok((tcp_stream, addr)) => {
                info!("[SERVER] Accepted connection from {}", addr);
                let conn = TcpConnection::new_server_connection(tcp_stream);
                Ok(Box::new(conn))
            }
            Err(e) => {
                error!("[SERVER] Error accepting connection {}", e);
                Err(ServerError::AcceptError)
            }
        }
    }
}
