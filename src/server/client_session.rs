use std::sync::Arc;

use lib::{
    common_errors::ConnectionError,
    connection_protocol::ConnectionProtocol,
    serializer::{deserialize, serialize},
    service_messages::ServiceRequest,
};
use log::{debug, warn};

use crate::request_handler::RequestHandler;

/// Atiende los pedidos de un cliente conectado, uno por vez, hasta que cierre la conexion.
pub async fn serve_client(
    mut connection: Box<dyn ConnectionProtocol + Send>,
    handler: Arc<RequestHandler>,
) -> Result<(), ConnectionError> {
    loop {
        let mut encoded = match connection.recv().await {
            Ok(encoded) => encoded,
            Err(ConnectionError::ConnectionClosed) => return Ok(()),
            Err(e) => return Err(e),
        };
        let request: ServiceRequest = match deserialize(&mut encoded) {
            Ok(request) => request,
            Err(e) => {
                warn!("[CLIENT SESSION] Discarding malformed request, {}", e);
                return Err(ConnectionError::SerializationError);
            }
        };
        debug!("[CLIENT SESSION] Received {:?}", request);

        let response = handler.handle(request);
        let serialized = serialize(&response)?;
        connection.send(&serialized).await?;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_std::task;
    use async_trait::async_trait;
    use lib::service_messages::{ConsumptionRequest, ServiceResponse};

    use crate::diagnostics_evaluator::ConstantDiagnostics;

    use super::*;

    /// Conexion en memoria: entrega los frames cargados y guarda lo enviado
    struct ScriptedConnection {
        incoming: VecDeque<Result<Vec<u8>, ConnectionError>>,
        sent: Arc<std::sync::Mutex<Vec<Vec<u8>>>>,
    }

    #[async_trait]
    impl ConnectionProtocol for ScriptedConnection {
        async fn send(&mut self, data: &[u8]) -> Result<(), ConnectionError> {
            self.sent.lock()?.push(data.to_vec());
            Ok(())
        }
        async fn recv(&mut self) -> Result<Vec<u8>, ConnectionError> {
            self.incoming
                .pop_front()
                .unwrap_or(Err(ConnectionError::ConnectionClosed))
        }
        async fn close(&mut self) -> Result<(), ConnectionError> {
            Ok(())
        }
    }

    fn consumption_frame() -> Vec<u8> {
        serialize(&ServiceRequest::ConsumedCapsule(ConsumptionRequest {
            client_id: "c1".to_string(),
            capsule_type: "ristretto".to_string(),
        }))
        .unwrap()
    }

    fn run_session(
        incoming: Vec<Result<Vec<u8>, ConnectionError>>,
    ) -> (Result<(), ConnectionError>, Vec<Vec<u8>>) {
        let sent = Arc::new(std::sync::Mutex::new(Vec::new()));
        let connection = ScriptedConnection {
            incoming: incoming.into_iter().collect(),
            sent: sent.clone(),
        };
        let handler = Arc::new(RequestHandler::new(Box::new(ConstantDiagnostics)));
        let result = task::block_on(serve_client(Box::new(connection), handler));
        let sent = sent.lock().unwrap().clone();
        (result, sent)
    }

    #[test]
    fn should_answer_every_request_until_the_client_closes() {
        let (result, mut sent) = run_session(vec![Ok(consumption_frame()), Ok(consumption_frame())]);
        assert_eq!(Ok(()), result);
        assert_eq!(2, sent.len());

        let second: ServiceResponse = deserialize(&mut sent[1]).unwrap();
        match second {
            ServiceResponse::ConsumedCapsule(reply) => assert_eq!(9, reply.remaining_count),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn should_end_session_on_malformed_request() {
        let (result, sent) = run_session(vec![Ok(b"not json\n".to_vec()), Ok(consumption_frame())]);
        assert_eq!(Err(ConnectionError::SerializationError), result);
        assert!(sent.is_empty());
    }

    #[test]
    fn should_propagate_lost_connection() {
        let (result, sent) = run_session(vec![
            Ok(consumption_frame()),
            Err(ConnectionError::ConnectionLost),
        ]);
        assert_eq!(Err(ConnectionError::ConnectionLost), result);
        assert_eq!(1, sent.len());
    }
}
