// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tether_bind::TwoWayBinding;
use tether_core::{Change, Scalar, UpdateSource, ViewProperty};
use tether_test_utils::{FakeTextField, FakeView, Recorder};

#[test]
fn test_user_edit_reaches_the_scalar_tagged_as_view() {
    // Arrange
    let field = FakeTextField::new(String::new());
    let binding = TwoWayBinding::from_view(&field);
    let changes: Recorder<Change<String>> = Recorder::new();
    let _sub = changes.record(&binding.scalar().changes());

    // Act
    field.user_edit("hello".to_string());

    // Assert
    assert_eq!(binding.scalar().get(), "hello");
    assert_eq!(
        changes.values(),
        vec![Change::new("hello".to_string(), UpdateSource::View)]
    );
}

#[test]
fn test_view_change_is_not_echoed_back_to_the_view() {
    // Arrange
    let field = FakeTextField::new(String::new());
    let binding = TwoWayBinding::from_view(&field);

    // Act
    field.user_edit("typed".to_string());
    field.user_edit("typed more".to_string());

    // Assert
    assert_eq!(field.write_count(), 0);
    assert_eq!(binding.scalar().get(), "typed more");
}

#[test]
fn test_model_set_is_written_to_the_view() -> anyhow::Result<()> {
    // Arrange
    let field = FakeTextField::new(String::new());
    let binding = TwoWayBinding::from_view(&field);

    // Act
    binding.scalar().set("from code".to_string())?;

    // Assert
    assert_eq!(field.displayed(), "from code");
    assert_eq!(field.write_count(), 1);
    Ok(())
}

#[test]
fn test_echoing_view_does_not_feed_back_into_the_scalar() -> anyhow::Result<()> {
    // Arrange
    let field = FakeTextField::echoing(String::new());
    let binding = TwoWayBinding::from_view(&field);
    let updates = Recorder::new();
    let _sub = updates.record(binding.scalar());

    // Act
    binding.scalar().set("a".to_string())?;
    binding.scalar().set("b".to_string())?;
    field.user_edit("c".to_string());

    // Assert
    assert_eq!(updates.values(), vec!["a", "b", "c"]);
    assert_eq!(field.write_count(), 2);
    assert_eq!(field.displayed(), "c");
    Ok(())
}

#[test]
fn test_bind_does_not_copy_either_value() {
    // Arrange
    let field = FakeView::new(1u8);
    let scalar = Scalar::new(2u8);

    // Act
    let _binding = TwoWayBinding::bind(&field, scalar.clone());

    // Assert
    assert_eq!(field.displayed(), 1);
    assert_eq!(scalar.get(), 2);
}

#[test]
fn test_unbind_stops_both_directions() -> anyhow::Result<()> {
    // Arrange
    let field = FakeTextField::new(String::new());
    let binding = TwoWayBinding::from_view(&field);

    // Act
    let scalar = binding.unbind();
    field.user_edit("ignored".to_string());
    scalar.set("also ignored".to_string())?;

    // Assert
    assert_eq!(scalar.get(), "also ignored");
    assert_eq!(field.displayed(), "ignored");
    assert_eq!(field.listener_count(), 0);
    assert_eq!(scalar.observer_count(), 0);
    Ok(())
}

#[test]
fn test_binding_does_not_keep_the_view_alive() -> anyhow::Result<()> {
    // Arrange
    let field = FakeTextField::new(String::new());
    let binding = TwoWayBinding::from_view(&field);
    let weak = Arc::downgrade(&field);

    // Act
    drop(field);
    binding.scalar().set("nobody listens".to_string())?;

    // Assert
    assert!(weak.upgrade().is_none());
    assert!(!binding.is_view_alive());
    Ok(())
}

#[test]
fn test_read_happens_once_per_user_edit() {
    // Arrange
    let field = FakeTextField::new(String::new());
    let _binding = TwoWayBinding::from_view(&field);
    let reads_after_bind = field.read_count();

    // Act
    field.user_edit("x".to_string());

    // Assert
    assert_eq!(field.read_count() - reads_after_bind, 1);
    assert_eq!(field.read(), "x");
}
