// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tether::prelude::*;
use tether::{BindingTable, DisposeBag, UpdateSource, ViewId};
use tether_test_utils::{FakeTextField, Recorder};

#[test]
fn test_update_callback_fires_once_per_external_change() -> anyhow::Result<()> {
    // Arrange
    let field = FakeTextField::echoing(String::new());
    let table = BindingTable::new();
    let text = table.scalar_for(ViewId::of(&field), &field);
    let updates = Recorder::new();
    let _sub = updates.record(&text);

    // Act
    field.user_edit("typed".to_string());
    text.set("programmatic".to_string())?;

    // Assert
    assert_eq!(updates.values(), vec!["typed", "programmatic"]);
    assert_eq!(field.displayed(), "programmatic");
    assert_eq!(field.write_count(), 1);
    Ok(())
}

#[test]
fn test_derived_label_follows_the_field() -> anyhow::Result<()> {
    // Arrange
    let input = FakeTextField::new(String::new());
    let label = FakeTextField::new(String::new());
    let table = BindingTable::new();
    let bag = DisposeBag::new();
    let input_text = table.scalar_for(ViewId::of(&input), &input);
    let label_text = table.scalar_for(ViewId::of(&label), &label);

    let target = label_text.clone();
    input_text
        .clone()
        .map(|text: String| format!("{} characters", text.chars().count()))
        .distinct()
        .observe(move |summary: String| {
            let _ = target.set(summary);
        })
        .dispose_in(&bag);

    // Act
    input.user_edit("héllo".to_string());
    input.user_edit("héllo".to_string());
    input.user_edit("hi".to_string());

    // Assert
    assert_eq!(label.displayed(), "2 characters");
    assert_eq!(label.write_count(), 2);
    Ok(())
}

#[test]
fn test_observers_can_tell_user_edits_from_code() -> anyhow::Result<()> {
    // Arrange
    let field = FakeTextField::new(String::new());
    let table = BindingTable::new();
    let text = table.scalar_for(ViewId::of(&field), &field);
    let sources = Recorder::new();
    let _sub = text
        .changes()
        .map(|change: tether::Change<String>| change.source)
        .observe({
            let sources = sources.clone();
            move |source: UpdateSource| sources.push(source)
        });

    // Act
    field.user_edit("a".to_string());
    text.set("b".to_string())?;

    // Assert
    assert_eq!(sources.values(), vec![UpdateSource::View, UpdateSource::Model]);
    Ok(())
}

#[test]
fn test_removing_the_view_entry_ends_derived_pipelines() {
    // Arrange
    let field = FakeTextField::new(String::new());
    let table = BindingTable::new();
    let id = ViewId::of(&field);
    let text = table.scalar_for(id, &field);
    let recorder = Recorder::new();
    let _sub = recorder.record(&text.clone().filter(|t: &String| !t.is_empty()));

    // Act
    table.remove(&id);
    field.user_edit("late".to_string());

    // Assert
    assert!(recorder.is_empty());
    assert_eq!(text.observer_count(), 0);
}
