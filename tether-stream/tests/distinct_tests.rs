// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tether_core::Scalar;
use tether_stream::prelude::*;
use tether_test_utils::Recorder;

#[test]
fn test_distinct_suppresses_adjacent_duplicates() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(String::new());
    let recorder = Recorder::new();
    let _sub = recorder.record(&scalar.clone().distinct());

    // Act
    for text in ["a", "a", "b", "b", "b"] {
        scalar.set(text.to_string())?;
    }

    // Assert
    assert_eq!(recorder.values(), vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_distinct_keeps_non_adjacent_repeats() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(0);
    let recorder = Recorder::new();
    let _sub = recorder.record(&scalar.clone().distinct());

    // Act
    for n in [1, 1, 2, 1] {
        scalar.set(n)?;
    }

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 1]);
    Ok(())
}

#[test]
fn test_first_value_passes_even_if_equal_to_current() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(5);
    let recorder = Recorder::new();
    let _sub = recorder.record(&scalar.clone().distinct());

    // Act
    scalar.set(5)?;

    // Assert
    assert_eq!(recorder.values(), vec![5]);
    Ok(())
}

#[test]
fn test_distinct_twice_equals_distinct_once() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(0);
    let once = Recorder::new();
    let twice = Recorder::new();
    let _a = once.record(&scalar.clone().distinct());
    let _b = twice.record(&scalar.clone().distinct().distinct());

    // Act
    for n in [1, 1, 2, 2, 3, 1, 1] {
        scalar.set(n)?;
    }

    // Assert
    assert_eq!(once.values(), vec![1, 2, 3, 1]);
    assert_eq!(twice.values(), once.values());
    Ok(())
}

#[test]
fn test_subscriptions_track_their_own_last_value() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(0);
    let distinct = scalar.clone().distinct();
    let early = Recorder::new();
    let _a = early.record(&distinct);
    scalar.set(1)?;

    // Act
    let late = Recorder::new();
    let _b = late.record(&distinct);
    scalar.set(1)?;

    // Assert
    assert_eq!(early.values(), vec![1]);
    assert_eq!(late.values(), vec![1]);
    Ok(())
}

#[test]
fn test_distinct_by_compares_keys() -> anyhow::Result<()> {
    // Arrange
    let scalar = Scalar::new(String::new());
    let recorder = Recorder::new();
    let _sub = recorder.record(&scalar.clone().distinct_by(|text: &String| text.to_lowercase()));

    // Act
    for text in ["Rust", "rust", "RUST", "Go"] {
        scalar.set(text.to_string())?;
    }

    // Assert
    assert_eq!(recorder.values(), vec!["Rust", "Go"]);
    Ok(())
}
