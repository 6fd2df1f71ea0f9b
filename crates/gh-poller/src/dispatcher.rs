//! Dispatcher for middleware and background task action dispatch
//!
//! Middleware and the query loop never touch state directly. They send
//! actions through the Dispatcher; the store drains the channel on the UI
//! thread and runs each action through the full middleware chain.
//!
//! This enables patterns like:
//! - A key press translated into `RunAction::Request`
//! - The query loop publishing `QuerySucceeded` from a tokio task

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
