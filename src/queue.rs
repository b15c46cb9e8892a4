//! Bounded property queue for `no_std` environments.
//!
//! Carries [`PropertyWrite`]s from the accessory callbacks to the controller.
//! Every push and pop runs in a critical section, so producers may live in
//! another task or an interrupt.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::property::PropertyWrite;

/// Error returned when the queue has no free slot.
///
/// Carries the rejected write back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueFull<T>(pub T);

/// A bounded FIFO of property writes.
pub struct PropertyQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<PropertyWrite, SIZE>>>,
}

impl<const SIZE: usize> PropertyQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle.
    pub const fn sender(&self) -> PropertySender<'_, SIZE> {
        PropertySender { queue: self }
    }

    /// Get a consumer handle.
    ///
    /// The controller is expected to be the only consumer.
    pub const fn receiver(&self) -> PropertyReceiver<'_, SIZE> {
        PropertyReceiver { queue: self }
    }

    /// Enqueue a write.
    pub fn push(&self, write: PropertyWrite) -> Result<(), QueueFull<PropertyWrite>> {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .borrow_mut()
                .push_back(write)
                .map_err(QueueFull)
        })
    }

    /// Dequeue the oldest write, if any.
    pub fn pop(&self) -> Option<PropertyWrite> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued writes.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for PropertyQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`PropertyQueue`].
#[derive(Clone, Copy)]
pub struct PropertySender<'a, const SIZE: usize> {
    queue: &'a PropertyQueue<SIZE>,
}

impl<const SIZE: usize> PropertySender<'_, SIZE> {
    /// Enqueue a write.
    ///
    /// Returns `Err(QueueFull(write))` if the queue is full.
    pub fn send(&self, write: PropertyWrite) -> Result<(), QueueFull<PropertyWrite>> {
        self.queue.push(write)
    }
}

/// Consumer handle for a [`PropertyQueue`].
#[derive(Clone, Copy)]
pub struct PropertyReceiver<'a, const SIZE: usize> {
    queue: &'a PropertyQueue<SIZE>,
}

impl<const SIZE: usize> PropertyReceiver<'_, SIZE> {
    /// Dequeue the oldest write, if any.
    pub fn receive(&self) -> Option<PropertyWrite> {
        self.queue.pop()
    }
}
