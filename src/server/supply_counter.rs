use std::sync::atomic::{AtomicUsize, Ordering};

use lib::service_messages::ConsumptionReply;

use crate::constants::{FULL_SUPPLY, LOW_SUPPLY_MARK, NEXT_PROVISION_DATE, NO_RESUPPLY_NOTE};

/// Stock de capsulas de una cafetera. Cada consumo lee el stock, decide si hay que reponer
/// y descuenta una capsula en un unico paso atomico.
pub struct SupplyCounter {
    remaining: AtomicUsize,
}

impl SupplyCounter {
    pub fn new() -> SupplyCounter {
        SupplyCounter {
            remaining: AtomicUsize::new(FULL_SUPPLY),
        }
    }

    /// Registra el consumo de una capsula. La respuesta muestra el stock previo al descuento;
    /// si ese stock estaba en la marca baja o por debajo, se repone a FULL_SUPPLY antes de descontar.
    pub fn consume(&self) -> ConsumptionReply {
        let previous = self.remaining.fetch_update(Ordering::AcqRel, Ordering::Acquire, |r| {
            Some(next_remaining(r))
        });
        // El closure siempre devuelve Some, asi que ambos brazos traen el valor previo
        let previous = previous.unwrap_or_else(|current| current);
        build_reply(previous)
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }
}

impl Default for SupplyCounter {
    fn default() -> Self {
        SupplyCounter::new()
    }
}

fn needs_resupply(remaining: usize) -> bool {
    remaining <= LOW_SUPPLY_MARK
}

fn next_remaining(remaining: usize) -> usize {
    if needs_resupply(remaining) {
        FULL_SUPPLY - 1
    } else {
        remaining - 1
    }
}

fn build_reply(remaining: usize) -> ConsumptionReply {
    let note = if needs_resupply(remaining) {
        NEXT_PROVISION_DATE
    } else {
        NO_RESUPPLY_NOTE
    };
    ConsumptionReply {
        resupply_triggered: false,
        remaining_count: remaining,
        next_provision_note: note.to_string(),
    }
}
