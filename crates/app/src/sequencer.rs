//! Per-endpoint request sequencing.
//!
//! Poll responses may resolve out of order. Each request takes a [`Ticket`]
//! before it is sent; when the response arrives it is applied only if no
//! newer ticket has been issued for the same endpoint since.

use std::cell::Cell;

/// Polled endpoints whose responses overwrite state wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/status`
    Status,
    /// `GET /api/events`
    Events,
}

impl Endpoint {
    fn index(self) -> usize {
        match self {
            Self::Status => 0,
            Self::Events => 1,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status => f.write_str("status"),
            Self::Events => f.write_str("events"),
        }
    }
}

/// Sequence number issued for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    endpoint: Endpoint,
    seq: u64,
}

impl Ticket {
    /// Endpoint the ticket was issued for.
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        self.endpoint
    }

    /// Position of the request in its endpoint's sequence, starting at 1.
    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// Monotonic counters, one per [`Endpoint`].
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: [Cell<u64>; 2],
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for `endpoint`, superseding all earlier ones.
    pub fn issue(&self, endpoint: Endpoint) -> Ticket {
        let counter = &self.latest[endpoint.index()];
        let seq = counter.get() + 1;
        counter.set(seq);
        Ticket { endpoint, seq }
    }

    /// Whether `ticket` is still the newest for its endpoint.
    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest[ticket.endpoint.index()].get() == ticket.seq
    }
}
