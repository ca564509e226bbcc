//! Whole-bridge flow through `BridgeService`: transport channels in and out,
//! engine callbacks, independent request lifecycles.

mod common;

use std::sync::Arc;
use std::time::Duration;

use feedback_core::FeedbackEngine;
use feedback_dbus::{BridgeConfig, BridgeService, Outbound};

use common::{simple_play, stop_call, EngineCall, MockEngine};

#[tokio::test(start_paused = true)]
async fn test_play_stop_play_lifecycle() {
    let engine = MockEngine::new();
    let (service, mut outbound) =
        BridgeService::start(
            Arc::clone(&engine) as Arc<dyn FeedbackEngine>,
            BridgeConfig::default(),
        )
            .expect("default config is valid");
    let inbound = service.inbound();

    // First request: a ringtone.
    inbound.send(simple_play(1, "ringtone")).unwrap();
    assert_eq!(
        outbound.recv().await.unwrap(),
        Outbound::Ack {
            serial: 1,
            event_id: 1
        }
    );

    // Stopping it pauses first, then stops after the grace period.
    inbound.send(stop_call(2, 1)).unwrap();
    assert_eq!(
        outbound.recv().await.unwrap(),
        Outbound::Ack {
            serial: 2,
            event_id: 1
        }
    );

    tokio::time::sleep(Duration::from_millis(250)).await;

    assert_eq!(
        engine.calls(),
        vec![
            EngineCall::Play {
                name: "ringtone".to_string(),
                event_id: 1
            },
            EngineCall::Pause { event_id: 1 },
            EngineCall::Stop {
                event_id: 1,
                delay_ms: 0
            },
        ]
    );

    // A second request gets the next id and its own lifecycle.
    inbound.send(simple_play(3, "alarm")).unwrap();
    assert_eq!(
        outbound.recv().await.unwrap(),
        Outbound::Ack {
            serial: 3,
            event_id: 2
        }
    );
    assert_eq!(engine.active_count(), 1);

    drop(inbound);
    service.shutdown().await;
}

#[tokio::test]
async fn test_engine_callbacks_reach_the_bus() {
    let engine = MockEngine::new();
    let (service, mut outbound) =
        BridgeService::start(
            Arc::clone(&engine) as Arc<dyn FeedbackEngine>,
            BridgeConfig::default(),
        )
            .expect("default config is valid");
    let inbound = service.inbound();

    inbound.send(simple_play(1, "alarm")).unwrap();
    assert_eq!(
        outbound.recv().await.unwrap(),
        Outbound::Ack {
            serial: 1,
            event_id: 1
        }
    );

    let request = engine.active_requests().pop().unwrap();
    let observer = service.observer();

    observer.on_request_completed(&request, 3);
    assert_eq!(
        outbound.recv().await.unwrap(),
        Outbound::Status {
            event_id: 1,
            code: 3
        }
    );

    observer.on_request_failed(&request, "sink went away");
    assert_eq!(
        outbound.recv().await.unwrap(),
        Outbound::Status {
            event_id: 1,
            code: 0
        }
    );

    drop(inbound);
    service.shutdown().await;
}

#[tokio::test]
async fn test_start_rejects_invalid_config() {
    let engine = MockEngine::new();
    let config = BridgeConfig {
        interface: String::new(),
        ..Default::default()
    };

    assert!(BridgeService::start(Arc::clone(&engine) as Arc<dyn FeedbackEngine>, config).is_err());
}
