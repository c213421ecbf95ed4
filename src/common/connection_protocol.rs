use std::net::Shutdown;

use async_std::{
    io::{prelude::BufReadExt, BufReader, WriteExt},
    net::TcpStream,
};
use async_trait::async_trait;
use log::{error, info};

use crate::{common_errors::ConnectionError, constants::FRAME_DELIMITER};

/// Canal por el que viajan los mensajes serializados, un frame por llamada a recv.
#[async_trait]
pub trait ConnectionProtocol {
    async fn send(&mut self, data: &[u8]) -> Result<(), ConnectionError>;
    async fn recv(&mut self) -> Result<Vec<u8>, ConnectionError>;
    async fn close(&mut self) -> Result<(), ConnectionError>;
}

pub struct TcpConnection {
    writer: TcpStream,
    reader: BufReader<TcpStream>,
}

impl TcpConnection {
    /// Abre una conexion hacia el servicio en server_addr (host:puerto)
    pub async fn connect(server_addr: &str) -> Result<TcpConnection, ConnectionError> {
        match TcpStream::connect(server_addr).await {
            Err(e) => {
                error!(
                    "[TCP CONNECTION] Error connecting to server {}, {}",
                    server_addr, e
                );
                Err(ConnectionError::ConnectionLost)
            }
            Ok(stream) => {
                info!(
                    "[TCP CONNECTION] Established connection to coffee service {}",
                    server_addr
                );
                Ok(TcpConnection::new_server_connection(stream))
            }
        }
    }

    pub fn new_server_connection(stream: TcpStream) -> TcpConnection {
        TcpConnection {
            writer: stream.clone(),
            reader: BufReader::new(stream),
        }
    }
}

#[async_trait]
impl ConnectionProtocol for TcpConnection {
    async fn send(&mut self, data: &[u8]) -> Result<(), ConnectionError> {
        match self.writer.write_all(data).await {
            Ok(()) => Ok(()),
            Err(error) => {
                error!("[TCP CONNECTION] Error sending message, {}", error);
                Err(ConnectionError::ConnectionLost)
            }
        }
    }

    async fn recv(&mut self) -> Result<Vec<u8>, ConnectionError> {
        let mut buffer = Vec::new();
        match self.reader.read_until(FRAME_DELIMITER, &mut buffer).await {
            Ok(0) => {
                info!("[TCP CONNECTION] Closed connection");
                Err(ConnectionError::ConnectionClosed)
            }
            Ok(_) => Ok(buffer),
            Err(error) => {
                error!("[TCP CONNECTION] Error receiving message, {}", error);
                Err(ConnectionError::ConnectionLost)
            }
        }
    }

    async fn close(&mut self) -> Result<(), ConnectionError> {
        self.writer.shutdown(Shutdown::Both)?;
        info!("[TCP CONNECTION] Connection shut down");
        Ok(())
    }
}
