use std::net::SocketAddr;
use std::sync::Arc;

use async_std::task;
use log::{info, warn};

use crate::{
    client_session::serve_client,
    connection_server::{ConnectionServer, TcpConnectionServer},
    diagnostics_evaluator::ConstantDiagnostics,
    errors::ServerError,
    request_handler::RequestHandler,
};

/// Representa al servicio de una cafetera: escucha conexiones de clientes y atiende cada una
/// en su propia tarea, compartiendo un unico RequestHandler.
pub struct CoffeeServiceServer {
    listener: TcpConnectionServer,
    handler: Arc<RequestHandler>,
}

impl CoffeeServiceServer {
    /// Devuelve un nuevo servidor, o error en caso de no poder abrir el listener.
    pub async fn new(port: u16) -> Result<CoffeeServiceServer, ServerError> {
        let listener = TcpConnectionServer::new(port).await?;
        let handler = Arc::new(RequestHandler::new(Box::new(ConstantDiagnostics)));
        Ok(CoffeeServiceServer { listener, handler })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr()
    }

    /// Acepta conexiones indefinidamente. Solo termina si falla el listener.
    pub async fn listen(&self) -> Result<(), ServerError> {
        info!("[SERVER] Server started, listening on {}", self.local_addr()?);
        loop {
            let connection = self.listener.listen().await?;
            let handler = self.handler.clone();
            task::spawn(async move {
                if let Err(e) = serve_client(connection, handler).await {
                    warn!("[SERVER] Client session ended with error {:?}", e);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use lib::{
        common_errors::ConnectionError,
        connection_protocol::{ConnectionProtocol, TcpConnection},
        serializer::{deserialize, serialize},
        service_messages::{
            ConsumptionRequest, DiagnosticsReply, MachineReading, ServiceRequest, ServiceResponse,
        },
    };

    use super::*;

    async fn start_server() -> String {
        let server = CoffeeServiceServer::new(0).await.unwrap();
        let port = server.local_addr().unwrap().port();
        task::spawn(async move { server.listen().await });
        format!("127.0.0.1:{}", port)
    }

    async fn call(
        connection: &mut TcpConnection,
        request: &ServiceRequest,
    ) -> Result<ServiceResponse, ConnectionError> {
        connection.send(&serialize(request)?).await?;
        let mut encoded = connection.recv().await?;
        Ok(deserialize(&mut encoded)?)
    }

    #[test]
    fn should_announce_provision_date_on_sixth_consumption() {
        task::block_on(async {
            let addr = start_server().await;
            let mut connection = TcpConnection::connect(&addr).await.unwrap();
            let request = ServiceRequest::ConsumedCapsule(ConsumptionRequest {
                client_id: "c1".to_string(),
                capsule_type: "ristretto".to_string(),
            });

            let mut replies = Vec::new();
            for _ in 0..6 {
                match call(&mut connection, &request).await.unwrap() {
                    ServiceResponse::ConsumedCapsule(reply) => replies.push(reply),
                    other => panic!("unexpected response {:?}", other),
                }
            }

            let sixth = &replies[5];
            assert_eq!(5, sixth.remaining_count);
            assert_eq!("11 of november of 2019", sixth.next_provision_note);
            assert!(replies.iter().all(|reply| !reply.resupply_triggered));
        });
    }

    #[test]
    fn should_return_fixed_diagnostics_for_reference_reading() {
        task::block_on(async {
            let addr = start_server().await;
            let mut connection = TcpConnection::connect(&addr).await.unwrap();
            let request = ServiceRequest::CheckMachineStatus(MachineReading {
                water_temperature: 7.0,
                connected_seconds: 8,
                last_capsule_pressure: 9.0,
            });

            let response = call(&mut connection, &request).await.unwrap();
            assert_eq!(
                ServiceResponse::CheckMachineStatus(DiagnosticsReply {
                    healthy: false,
                    issue_description: "whatever".to_string(),
                    technician_eta: "yesterday".to_string(),
                }),
                response
            );
        });
    }

    #[test]
    fn should_share_supply_across_connections() {
        task::block_on(async {
            let addr = start_server().await;
            let request = ServiceRequest::ConsumedCapsule(ConsumptionRequest {
                client_id: "c1".to_string(),
                capsule_type: "lungo".to_string(),
            });

            let mut first = TcpConnection::connect(&addr).await.unwrap();
            call(&mut first, &request).await.unwrap();
            first.close().await.unwrap();

            let mut second = TcpConnection::connect(&addr).await.unwrap();
            match call(&mut second, &request).await.unwrap() {
                ServiceResponse::ConsumedCapsule(reply) => assert_eq!(9, reply.remaining_count),
                other => panic!("unexpected response {:?}", other),
            }
        });
    }
}
