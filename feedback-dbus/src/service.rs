//! Bridge service loop
//!
//! [`BridgeService`] wires the handler and notifier to one outbound channel
//! and drains inbound messages on a background task. The transport pushes
//! decoded [`BusMessage`]s through the inbound sender and frames whatever
//! arrives on the outbound receiver; the engine gets the [`observer`]
//! handle for its settle callbacks.
//!
//! [`observer`]: BridgeService::observer

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use feedback_core::{EngineObserver, FeedbackEngine};

use crate::config::BridgeConfig;
use crate::handler::{ControlHandler, Handling};
use crate::notifier::StatusNotifier;
use crate::wire::{BusMessage, Outbound};

/// Running control bridge.
pub struct BridgeService {
    inbound_tx: mpsc::UnboundedSender<BusMessage>,
    notifier: Arc<StatusNotifier>,
    task: JoinHandle<()>,
}

impl BridgeService {
    /// Validate `config`, wire up the handler and notifier, and spawn the
    /// message loop. Returns the service plus the outbound receiver the
    /// transport drains.
    pub fn start(
        engine: Arc<dyn FeedbackEngine>,
        config: BridgeConfig,
    ) -> crate::error::ProtocolResult<(Self, mpsc::UnboundedReceiver<Outbound>)> {
        config.validate()?;

        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (inbound_tx, mut inbound_rx) = mpsc::unbounded_channel::<BusMessage>();

        let notifier = Arc::new(StatusNotifier::new(
            outbound_tx.clone(),
            config.event_id_key.clone(),
        ));
        let handler = ControlHandler::new(engine, outbound_tx, config);

        let task = tokio::spawn(async move {
            tracing::info!("control bridge started");

            while let Some(message) = inbound_rx.recv().await {
                if handler.handle(&message) == Handling::Pass {
                    tracing::debug!("message left for other consumers");
                }
            }

            tracing::info!("control bridge shut down");
        });

        Ok((
            Self {
                inbound_tx,
                notifier,
                task,
            },
            outbound_rx,
        ))
    }

    /// Sender the transport pushes inbound messages through.
    pub fn inbound(&self) -> mpsc::UnboundedSender<BusMessage> {
        self.inbound_tx.clone()
    }

    /// Observer handle for the engine's settle callbacks.
    pub fn observer(&self) -> Arc<dyn EngineObserver> {
        Arc::clone(&self.notifier) as Arc<dyn EngineObserver>
    }

    /// Stop the message loop and wait for it to finish.
    ///
    /// The loop ends once every clone of the inbound sender is gone, so the
    /// transport must drop its senders for shutdown to complete.
    pub async fn shutdown(self) {
        drop(self.inbound_tx);

        if let Err(error) = self.task.await {
            if !error.is_cancelled() {
                tracing::warn!("bridge task ended abnormally: {}", error);
            }
        }
    }
}
