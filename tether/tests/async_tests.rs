// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use std::time::Duration;
use tether::prelude::*;
use tether::{Promise, Scalar, TokioScheduler};
use tether_test_utils::{expect_next_value, results_for, FakeSearchService};

#[tokio::test(start_paused = true)]
async fn test_search_pipeline_on_tokio() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let query = Scalar::new(String::new());
    let service = FakeSearchService::new();
    let backend = service.clone();
    let mut results = query
        .clone()
        .throttle(Duration::from_millis(300), scheduler)
        .flat_map_latest(move |q: String| backend.search(&q))
        .into_stream();

    // Act
    query.set("ru".into())?;
    query.set("rust".into())?;
    while service.request_count() == 0 {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    service.complete(0)?;

    // Assert
    expect_next_value(&mut results, Ok(results_for("rust"))).await;
    assert_eq!(service.queries(), vec!["rust"]);
    Ok(())
}

#[tokio::test]
async fn test_promise_resolved_on_another_task_can_be_awaited() -> anyhow::Result<()> {
    // Arrange
    let (promise, resolver) = Promise::<u64, String>::pending();

    // Act
    let worker = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        resolver.succeed(42)
    });
    let outcome = promise.clone().await;
    worker.await??;

    // Assert
    assert_eq!(outcome, Ok(42));
    assert!(promise.is_resolved());
    Ok(())
}

#[tokio::test]
async fn test_scalar_changes_as_a_stream() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(0);
    let stream = scalar.clone().filter(|n: &i32| n % 2 == 1).into_stream();

    // Act
    for n in 1..=6 {
        scalar.set(n)?;
    }

    // Assert
    let odd: Vec<i32> = stream.take(3).collect().await;
    assert_eq!(odd, vec![1, 3, 5]);
    Ok(())
}
