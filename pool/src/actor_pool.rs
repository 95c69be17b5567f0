use crate::error::{PoolError, PoolResult};

/// An actor that ages by one tick per `advance` and eventually decays.
pub trait Transient {
    fn advance(&mut self);
    fn decayed(&self) -> bool;
}

/// Bounded collection of short-lived actors.
///
/// Actors are stored in emission order. `update` advances and prunes in a
/// single pass, so an actor that decays during an update is gone when the
/// update returns.
#[derive(Debug, Clone)]
pub struct ActorPool<T: Transient> {
    actors: Vec<T>,
    capacity: usize,
}

impl<T: Transient> ActorPool<T> {
    pub fn new(capacity: usize) -> Self {
        ActorPool {
            actors: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, actor: T) -> PoolResult<()> {
        if self.actors.len() >= self.capacity {
            log::trace!("actor pool full ({} actors)", self.capacity);
            return Err(PoolError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.actors.push(actor);
        Ok(())
    }

    /// Advances every actor one tick and drops the decayed ones.
    /// Returns how many were dropped.
    pub fn update(&mut self) -> usize {
        let before = self.actors.len();
        self.actors.retain_mut(|actor| {
            actor.advance();
            !actor.decayed()
        });
        before - self.actors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.actors.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.actors.clear();
    }
}

impl<'a, T: Transient> IntoIterator for &'a ActorPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
