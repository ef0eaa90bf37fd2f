use std::fmt;

use crate::error::{MazeError, Result};

/// Logical version of some piece of client state. Requests are stamped with
/// the epoch current when they were issued; a response whose epoch has since
/// moved on is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EpochCounter {
    current: Epoch,
}

impl EpochCounter {
    pub fn current(&self) -> Epoch {
        self.current
    }

    pub fn advance(&mut self) -> Epoch {
        self.current = Epoch(self.current.0.wrapping_add(1));
        self.current
    }

    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.current == epoch
    }

    pub fn check(&self, epoch: Epoch) -> Result<()> {
        if self.is_current(epoch) {
            Ok(())
        } else {
            Err(MazeError::StaleResponse {
                issued: epoch.0,
                current: self.current.0,
            })
        }
    }

    pub fn stamp<T>(&self, payload: T) -> Ticket<T> {
        Ticket {
            epoch: self.current,
            payload,
        }
    }
}

/// An outgoing request together with the epoch it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket<T> {
    pub epoch: Epoch,
    pub payload: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_epoch_rejects_old_tickets() {
        let mut counter = EpochCounter::default();
        let ticket = counter.stamp("req");
        assert!(counter.check(ticket.epoch).is_ok());
        counter.advance();
        let err = counter.check(ticket.epoch).unwrap_err();
        assert!(err.is_stale());
        assert!(counter.check(counter.current()).is_ok());
    }
}
