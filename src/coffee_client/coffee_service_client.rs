#[cfg(test)]
use mockall::automock;

use async_std::sync::Mutex;
use async_trait::async_trait;
use lib::{
    common_errors::ConnectionError,
    connection_protocol::{ConnectionProtocol, TcpConnection},
    serializer::{deserialize, serialize},
    service_messages::{
        ConsumptionReply, ConsumptionRequest, DiagnosticsReply, MachineReading, ServiceRequest,
        ServiceResponse,
    },
};
use log::{debug, info};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CoffeeServiceClient {
    async fn consumed_capsule(
        &self,
        request: ConsumptionRequest,
    ) -> Result<ConsumptionReply, ConnectionError>;
    async fn check_machine_status(
        &self,
        reading: MachineReading,
    ) -> Result<DiagnosticsReply, ConnectionError>;
    async fn disconnect(&self) -> Result<(), ConnectionError>;
}

/// Cliente TCP del servicio. Se conecta en la primera llamada y reutiliza la conexion;
/// si una llamada falla la conexion se descarta y la proxima llamada abre una nueva.
pub struct TcpCoffeeServiceClient {
    server_addr: String,
    connection: Mutex<Option<Box<dyn ConnectionProtocol + Send>>>,
}

impl TcpCoffeeServiceClient {
    pub fn new(server_addr: String) -> TcpCoffeeServiceClient {
        TcpCoffeeServiceClient {
            server_addr,
            connection: Mutex::new(None),
        }
    }

    async fn call(&self, request: ServiceRequest) -> Result<ServiceResponse, ConnectionError> {
        let mut connection = self.connection.lock().await;
        if connection.is_none() {
            let opened = TcpConnection::connect(&self.server_addr).await?;
            *connection = Some(Box::new(opened));
        }
        let result = match connection.as_mut() {
            Some(opened) => exchange(&mut **opened, &request).await,
            None => Err(ConnectionError::UnexpectedError),
        };
        if result.is_err() {
            *connection = None;
        }
        result
    }
}

async fn exchange(
    connection: &mut (dyn ConnectionProtocol + Send),
    request: &ServiceRequest,
) -> Result<ServiceResponse, ConnectionError> {
    let serialized = serialize(request)?;
    connection.send(&serialized).await?;
    let mut encoded = connection.recv().await?;
    let decoded: ServiceResponse = deserialize(&mut encoded)?;
    debug!("[COFFEE CLIENT] Received {:?}", decoded);
    Ok(decoded)
}

#[async_trait]
impl CoffeeServiceClient for TcpCoffeeServiceClient {
    async fn consumed_capsule(
        &self,
        request: ConsumptionRequest,
    ) -> Result<ConsumptionReply, ConnectionError> {
        match self.call(ServiceRequest::ConsumedCapsule(request)).await? {
            ServiceResponse::ConsumedCapsule(reply) => Ok(reply),
            _ => Err(ConnectionError::UnexpectedReply),
        }
    }

    async fn check_machine_status(
        &self,
        reading: MachineReading,
    ) -> Result<DiagnosticsReply, ConnectionError> {
        match self.call(ServiceRequest::CheckMachineStatus(reading)).await? {
            ServiceResponse::CheckMachineStatus(reply) => Ok(reply),
            _ => Err(ConnectionError::UnexpectedReply),
        }
    }

    async fn disconnect(&self) -> Result<(), ConnectionError> {
        if let Some(mut connection) = self.connection.lock().await.take() {
            connection.close().await?;
            info!("[COFFEE CLIENT] Disconnected from {}", self.server_addr);
        }
        Ok(())
    }
}
