// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tether_core::Scalar;
use tether_runtime::{TokioScheduler, VirtualScheduler};
use tether_stream::prelude::*;
use tether_test_utils::{expect_next_value, Recorder};
use tether_time::prelude::*;

#[test]
fn test_values_wait_for_the_scheduler() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let scalar = Scalar::new(0);
    let recorder = Recorder::new();
    let _sub = recorder.record(&scalar.clone().deliver_on(scheduler.clone()));

    // Act
    scalar.set(1)?;
    scalar.set(2)?;
    let before = recorder.values();
    scheduler.run_pending();

    // Assert
    assert!(before.is_empty());
    assert_eq!(recorder.values(), vec![1, 2]);
    Ok(())
}

#[test]
fn test_queued_values_are_discarded_after_unsubscribe() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let scalar = Scalar::new(0);
    let recorder = Recorder::new();
    let sub = recorder.record(&scalar.clone().deliver_on(scheduler.clone()));
    scalar.set(1)?;

    // Act
    drop(sub);
    scheduler.run_pending();

    // Assert
    assert!(recorder.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_deliver_on_tokio_preserves_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let scalar = Scalar::new(0);
    let mut stream = scalar.clone().deliver_on(scheduler).into_stream();

    // Act
    for n in 1..=50 {
        scalar.set(n)?;
    }

    // Assert
    for n in 1..=50 {
        expect_next_value(&mut stream, n).await;
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_on_tokio_with_paused_time() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let text = Scalar::new(String::new());
    let mut stream = text
        .clone()
        .throttle(Duration::from_millis(300), scheduler)
        .into_stream();

    // Act
    text.set("ru".into())?;
    text.set("rust".into())?;

    // Assert
    expect_next_value(&mut stream, "rust".to_string()).await;
    Ok(())
}
