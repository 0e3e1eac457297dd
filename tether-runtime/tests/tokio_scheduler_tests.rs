// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tether_runtime::{Scheduler, TokioScheduler};
use tokio::sync::oneshot;

#[tokio::test]
async fn test_immediate_tasks_run_in_schedule_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let log = Arc::new(Mutex::new(Vec::new()));
    let (done_tx, done_rx) = oneshot::channel();

    // Act
    for i in 0..100 {
        let log = Arc::clone(&log);
        scheduler.schedule(Box::new(move || log.lock().push(i)))?;
    }
    scheduler.schedule(Box::new(move || {
        let _ = done_tx.send(());
    }))?;
    done_rx.await?;

    // Assert
    assert_eq!(*log.lock(), (0..100).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delayed_task_waits_for_its_delay() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let start = scheduler.now();
    let (done_tx, done_rx) = oneshot::channel();
    let clock = scheduler.clone();

    // Act
    scheduler.schedule_after(
        Duration::from_millis(300),
        Box::new(move || {
            let _ = done_tx.send(clock.now());
        }),
    )?;
    let fired_at = done_rx.await?;

    // Assert
    assert!(fired_at - start >= Duration::from_millis(300));
    Ok(())
}

#[test]
fn test_current_without_runtime_fails() {
    let result = TokioScheduler::current();
    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_tasks_with_the_same_delay_run_in_schedule_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let log = Arc::new(Mutex::new(Vec::new()));
    let (done_tx, done_rx) = oneshot::channel();
    let delay = Duration::from_millis(20);

    // Act
    for i in 0..50 {
        let log = Arc::clone(&log);
        scheduler.schedule_after(delay, Box::new(move || log.lock().push(i)))?;
    }
    scheduler.schedule_after(
        delay,
        Box::new(move || {
            let _ = done_tx.send(());
        }),
    )?;
    done_rx.await?;

    // Assert
    assert_eq!(*log.lock(), (0..50).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_deadline_is_fixed_when_the_task_is_scheduled() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let start = scheduler.now();
    let (done_tx, done_rx) = oneshot::channel();
    let clock = scheduler.clone();
    scheduler.schedule_after(
        Duration::from_millis(100),
        Box::new(move || {
            let _ = done_tx.send(clock.now());
        }),
    )?;

    // Act
    tokio::time::advance(Duration::from_millis(60)).await;
    let fired_at = done_rx.await?;

    // Assert
    assert_eq!(fired_at - start, Duration::from_millis(100));
    Ok(())
}
