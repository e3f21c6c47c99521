//! Bounded mailbox for `no_std` environments.
//!
//! Producers post messages from UI code or interrupts; the frame loop
//! collects them once per frame. Access is serialized with
//! `critical-section`, storage is a fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when posting to a full mailbox; carries the message back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxFull<T>(pub T);

/// A bounded, interrupt-safe message queue.
pub struct Mailbox<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Mailbox<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers
    pub const fn poster(&self) -> Poster<'_, T, SIZE> {
        Poster { mailbox: self }
    }

    /// Handle for the consumer
    pub const fn collector(&self) -> Collector<'_, T, SIZE> {
        Collector { mailbox: self }
    }

    /// Queue a message, handing it back if the mailbox is full
    pub fn post(&self, message: T) -> Result<(), MailboxFull<T>> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(message)
                .map_err(MailboxFull)
        })
    }

    /// Take the oldest message
    pub fn collect(&self) -> Option<T> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Mailbox<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`Mailbox`].
pub struct Poster<'a, T, const SIZE: usize> {
    mailbox: &'a Mailbox<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Poster<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Poster<'_, T, SIZE> {}

impl<T, const SIZE: usize> Poster<'_, T, SIZE> {
    pub fn post(&self, message: T) -> Result<(), MailboxFull<T>> {
        self.mailbox.post(message)
    }
}

/// Consumer handle for a [`Mailbox`].
pub struct Collector<'a, T, const SIZE: usize> {
    mailbox: &'a Mailbox<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Collector<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Collector<'_, T, SIZE> {}

impl<'a, T, const SIZE: usize> Collector<'a, T, SIZE> {
    pub fn collect(&self) -> Option<T> {
        self.mailbox.collect()
    }

    /// Iterate over pending messages, oldest first
    pub fn drain(&self) -> impl Iterator<Item = T> + 'a {
        let mailbox = self.mailbox;
        core::iter::from_fn(move || mailbox.collect())
    }
}
