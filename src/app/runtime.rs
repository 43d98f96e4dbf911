// SPDX-License-Identifier: MPL-2.0
//! Tokio driver for [`App`].
//!
//! The runtime owns the application and a message channel. It applies
//! messages to the app one at a time and turns each returned [`Effect`]
//! into a spawned task that reports back over the channel. Timers and
//! ranking calls therefore never block command handling, and their results
//! are serialized with every other message.

use super::{App, Effect, Flags, Message};
use crate::application::search::SearchResolver;
use crate::infrastructure::resolver_from_config;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Drives an [`App`] on the current tokio runtime.
///
/// Every method that can spawn work must be called from within a tokio
/// runtime.
#[derive(Debug)]
pub struct Runtime {
    app: App,
    resolver: SearchResolver,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl Runtime {
    /// Wraps `app`. Delegate failures are recorded in the app's activity log.
    #[must_use]
    pub fn new(app: App, resolver: SearchResolver) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let resolver = resolver.with_diagnostics(app.diagnostics_handle());
        Self {
            app,
            resolver,
            tx,
            rx,
        }
    }

    /// Builds the app from the user's config and wires the configured
    /// ranking delegate.
    #[must_use]
    pub fn start(flags: Flags) -> Self {
        let (app, effect) = App::new(flags);
        let resolver = resolver_from_config(&app.config().search);
        let runtime = Self::new(app, resolver);
        runtime.execute(effect);
        runtime
    }

    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Mutable access for projections that need it, such as diagnostics export.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// A sender for messages from outside the runtime.
    #[must_use]
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.tx.clone()
    }

    /// Applies a message and starts the work it requests.
    pub fn dispatch(&mut self, message: Message) {
        let effect = self.app.update(message);
        self.execute(effect);
    }

    /// Waits for the next message produced by a completed effect and applies it.
    pub async fn next(&mut self) {
        if let Some(message) = self.rx.recv().await {
            self.dispatch(message);
        }
    }

    /// Applies every message that is already waiting. Returns how many.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message);
            handled += 1;
        }
        handled
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::ExpireNotification(expiry) => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(expiry.after).await;
                    let _ = tx.send(Message::NotificationExpired(expiry.token));
                });
            }
            Effect::Rank { ticket, request } => {
                let tx = self.tx.clone();
                let resolver = self.resolver.clone();
                tokio::spawn(async move {
                    let outcome = resolver.rank(request).await;
                    let _ = tx.send(Message::SearchCompleted { ticket, outcome });
                });
            }
        }
    }
}
