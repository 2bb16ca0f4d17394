//! Background key listener.
//!
//! Terminal event reads block, but the game loop must not. A dedicated thread
//! blocks on an [`EventSource`] and publishes each key into a single-slot
//! `watch` channel; the loop samples that slot once per tick with
//! [`KeyListener::poll`]. A newer key overwrites an unread older one.

use std::io;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event};
use log::{debug, warn};
use tokio::sync::watch;

use crate::map::key_from_event;
use crate::types::Key;

/// A blocking source of key presses.
pub trait EventSource: Send + 'static {
    /// Block until the next event.
    ///
    /// Returns `Ok(None)` for events that are not key presses (resize, mouse,
    /// focus, releases). An error ends the listener.
    fn next_key(&mut self) -> io::Result<Option<Key>>;
}

/// Key presses from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        match event::read()? {
            Event::Key(key) => Ok(key_from_event(key)),
            _ => Ok(None),
        }
    }
}

/// Non-blocking access to "the latest key pressed since the last look".
pub trait KeyPoll {
    fn poll(&mut self) -> Option<Key>;
}

/// Handle to the listener thread.
///
/// The thread is detached: dropping the handle closes the channel, and the
/// thread exits the next time it tries to publish.
pub struct KeyListener {
    rx: watch::Receiver<Option<Key>>,
    _thread: JoinHandle<()>,
}

impl KeyListener {
    /// Spawn the listener thread over `source`.
    pub fn spawn<S: EventSource>(mut source: S) -> io::Result<Self> {
        let (tx, rx) = watch::channel(None);

        let thread = thread::Builder::new()
            .name("key-listener".into())
            .spawn(move || loop {
                match source.next_key() {
                    Ok(Some(key)) => {
                        if tx.send(Some(key)).is_err() {
                            debug!("key listener: receiver dropped, stopping");
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!("key listener: event source failed: {}", e);
                        return;
                    }
                }
            })?;

        Ok(Self {
            rx,
            _thread: thread,
        })
    }

    /// Spawn over the controlling terminal.
    pub fn terminal() -> io::Result<Self> {
        Self::spawn(TerminalEvents)
    }

    /// The most recent unread key, or `None` without waiting.
    pub fn poll(&mut self) -> Option<Key> {
        match self.rx.has_changed() {
            Ok(true) => *self.rx.borrow_and_update(),
            // No new key, or the listener has stopped.
            _ => None,
        }
    }
}

impl KeyPoll for KeyListener {
    fn poll(&mut self) -> Option<Key> {
        KeyListener::poll(self)
    }
}
