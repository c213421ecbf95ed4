#[cfg(test)]
use mockall::automock;

use lib::service_messages::{DiagnosticsReply, MachineReading};

use crate::constants::{STUB_ISSUE_DESCRIPTION, STUB_TECHNICIAN_ETA};

/// Interfaz del evaluador de salud de una cafetera a partir de sus sensores
#[cfg_attr(test, automock)]
pub trait DiagnosticsEvaluator {
    fn evaluate(&self, reading: &MachineReading) -> DiagnosticsReply;
}

/// Evaluador sin logica de diagnostico: siempre informa el mismo problema.
/// La lectura se acepta pero no se usa, y no se valida ningun rango.
pub struct ConstantDiagnostics;

impl DiagnosticsEvaluator for ConstantDiagnostics {
    fn evaluate(&self, _reading: &MachineReading) -> DiagnosticsReply {
        DiagnosticsReply {
            healthy: false,
            issue_description: STUB_ISSUE_DESCRIPTION.to_string(),
            technician_eta: STUB_TECHNICIAN_ETA.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_reply() -> DiagnosticsReply {
        DiagnosticsReply {
            healthy: false,
            issue_description: "whatever".to_string(),
            technician_eta: "yesterday".to_string(),
        }
    }

    #[test]
    fn should_return_fixed_verdict_for_reference_reading() {
        let reading = MachineReading {
            water_temperature: 7.0,
            connected_seconds: 8,
            last_capsule_pressure: 9.0,
        };
        assert_eq!(expected_reply(), ConstantDiagnostics.evaluate(&reading));
    }

    #[test]
    fn should_ignore_out_of_range_readings() {
        let readings = [
            MachineReading {
                water_temperature: -273.0,
                connected_seconds: -1,
                last_capsule_pressure: f32::MAX,
            },
            MachineReading {
                water_temperature: f32::NAN,
                connected_seconds: i64::MAX,
                last_capsule_pressure: 0.0,
            },
        ];
        for reading in readings.iter() {
            assert_eq!(expected_reply(), ConstantDiagnostics.evaluate(reading));
            assert_eq!(expected_reply(), ConstantDiagnostics.evaluate(reading));
        }
    }
}
