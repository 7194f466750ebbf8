//! Control command queue.
//!
//! A bounded, interrupt-safe queue between the input side (button ISR, host
//! link) and the engine, built on `critical-section` and `heapless::Deque`.
//! The engine drains it at the top of every frame; senders never block.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::effect::EffectId;

/// Steering inputs for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Switch to a specific effect.
    SetMode(EffectId),
    /// Advance to the next effect in the cycle.
    NextMode,
    /// Change the output brightness.
    SetBrightness(u8),
    /// An impact fired; show the flash overlay.
    ImpactFlash,
}

/// Error returned when trying to send to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandQueueFull(pub ControlCommand);

/// Bounded command queue. Declare one `static` and hand out sender/receiver
/// handles from it.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ControlCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle. Multiple senders may coexist.
    #[must_use]
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for the engine to drain.
    #[must_use]
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    fn try_send(&self, command: ControlCommand) -> Result<(), CommandQueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(CommandQueueFull)
        })
    }

    fn try_receive(&self) -> Option<ControlCommand> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight sending handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Enqueue a command; returns it back if the queue is full.
    pub fn try_send(&self, command: ControlCommand) -> Result<(), CommandQueueFull> {
        self.queue.try_send(command)
    }
}

/// Draining handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the next pending command, if any.
    pub fn try_receive(&self) -> Option<ControlCommand> {
        self.queue.try_receive()
    }
}
