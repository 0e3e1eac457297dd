// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;
use tether::prelude::*;
use tether::{Scalar, Subscription, VirtualScheduler};
use tether_test_utils::{results_for, FakeSearchService, Recorder, SearchResults};

const PAUSE: Duration = Duration::from_millis(300);

struct SearchScreen {
    query: Scalar<String>,
    results: Recorder<SearchResults>,
    service: Arc<FakeSearchService>,
    scheduler: VirtualScheduler,
    _subscription: Subscription,
}

fn search_screen() -> SearchScreen {
    let scheduler = VirtualScheduler::new();
    let query = Scalar::new(String::new());
    let service = FakeSearchService::new();
    let results = Recorder::new();

    let backend = Arc::clone(&service);
    let sink = results.clone();
    let subscription = query
        .clone()
        .filter(|q: &String| !q.is_empty())
        .throttle(PAUSE, scheduler.clone())
        .distinct()
        .map(move |q: String| backend.search(&q))
        .switch_to_latest()
        .on_success(move |found: SearchResults| sink.push(found));

    SearchScreen {
        query,
        results,
        service,
        scheduler,
        _subscription: subscription,
    }
}

#[test]
fn test_typing_burst_sends_one_request() -> anyhow::Result<()> {
    // Arrange
    let screen = search_screen();

    // Act
    for q in ["r", "ru", "rus", "rust"] {
        screen.query.set(q.to_string())?;
        screen.scheduler.advance(Duration::from_millis(40));
    }
    screen.scheduler.advance(PAUSE);
    screen.service.complete(0)?;

    // Assert
    assert_eq!(screen.service.queries(), vec!["rust"]);
    assert_eq!(screen.results.values(), vec![results_for("rust")]);
    Ok(())
}

#[test]
fn test_repeated_query_is_not_searched_again() -> anyhow::Result<()> {
    // Arrange
    let screen = search_screen();

    // Act
    screen.query.set("rust".into())?;
    screen.scheduler.advance(PAUSE);
    screen.query.set("rus".into())?;
    screen.query.set("rust".into())?;
    screen.scheduler.advance(PAUSE);

    // Assert
    assert_eq!(screen.service.request_count(), 1);
    Ok(())
}

#[test]
fn test_slow_stale_response_never_overwrites_newer_results() -> anyhow::Result<()> {
    // Arrange
    let screen = search_screen();
    screen.query.set("go".into())?;
    screen.scheduler.advance(PAUSE);
    screen.query.set("rust".into())?;
    screen.scheduler.advance(PAUSE);

    // Act
    screen.service.complete(1)?;
    screen.service.complete(0)?;

    // Assert
    assert_eq!(screen.service.queries(), vec!["go", "rust"]);
    assert_eq!(screen.results.values(), vec![results_for("rust")]);
    Ok(())
}

#[test]
fn test_empty_query_is_never_searched() -> anyhow::Result<()> {
    // Arrange
    let screen = search_screen();

    // Act
    screen.query.set(String::new())?;
    screen.scheduler.advance(PAUSE);

    // Assert
    assert_eq!(screen.service.request_count(), 0);
    assert_eq!(screen.scheduler.pending(), 0);
    Ok(())
}

#[test]
fn test_dropping_the_screen_subscription_stops_the_pipeline() -> anyhow::Result<()> {
    // Arrange
    let SearchScreen {
        query,
        service,
        scheduler,
        _subscription,
        ..
    } = search_screen();

    // Act
    drop(_subscription);
    query.set("rust".into())?;
    scheduler.advance(PAUSE);

    // Assert
    assert_eq!(service.request_count(), 0);
    assert_eq!(query.observer_count(), 0);
    Ok(())
}

#[test]
fn test_distinct_end_to_end() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(String::new());
    let recorder = Recorder::new();
    let _sub = recorder.record(&scalar.clone().distinct());

    // Act
    scalar.set("a".into())?;
    scalar.set("a".into())?;
    scalar.set("b".into())?;

    // Assert
    assert_eq!(recorder.values(), vec!["a", "b"]);
    Ok(())
}
