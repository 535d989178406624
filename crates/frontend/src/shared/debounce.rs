//! Debounce de busca (cancela e reinicia) e descarte de respostas superadas.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Sequência de requisições de uma listagem.
///
/// Cada carga pega um ticket; só a resposta do último ticket é aplicada.
/// Respostas que chegam depois de uma busca mais nova são descartadas.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Debouncer baseado em `Timeout`: agendar de novo derruba o timer anterior.
/// Soltar o `Timeout` cancela o `setTimeout` pendente.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: StoredValue::new_local(None),
            delay_ms,
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        // substituir solta o Timeout anterior, cancelando-o
        self.pending.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_sequence() {
        let seq = RequestSeq::new();
        let other = seq.clone();
        let t = seq.next();
        assert!(other.is_current(t));
        other.next();
        assert!(!seq.is_current(t));
    }
}
