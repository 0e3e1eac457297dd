// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from push-based observables to pull-based `futures::Stream`s.

use async_channel::Receiver;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use std::sync::Arc;
use tether_core::{Observable, Subscription};

/// A `Stream` of everything an observable emits after the stream was created.
///
/// Values are buffered without bound until polled. The underlying subscription
/// lives as long as the stream; dropping the stream unsubscribes. The stream
/// never ends on its own.
#[pin_project]
pub struct ObservableStream<T> {
    receiver: Pin<Box<Receiver<T>>>,
    subscription: Subscription,
}

impl<T> Stream for ObservableStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.project().receiver.as_mut().poll_next(cx)
    }
}

impl<T> ObservableStream<T> {
    /// Ends the subscription; values already buffered can still be drained.
    pub fn unsubscribe(&mut self) {
        core::mem::replace(&mut self.subscription, Subscription::empty()).unsubscribe();
        self.receiver.close();
    }
}

/// Extension trait converting an observable into a [`Stream`].
pub trait IntoStreamExt: Observable + Sized {
    /// Subscribes now and exposes the emissions as a stream.
    fn into_stream(self) -> ObservableStream<Self::Item> {
        let (sender, receiver) = async_channel::unbounded();
        let subscription = self.subscribe_observer(Arc::new(move |value: Self::Item| {
            if sender.try_send(value).is_err() {
                trace!("into_stream: receiver gone, value dropped");
            }
        }));
        ObservableStream {
            receiver: Box::pin(receiver),
            subscription,
        }
    }
}

impl<S: Observable> IntoStreamExt for S {}
