//! Progress observation.
//!
//! Searches notify an optional [`Observer`] once per processed node, after the node's edges have
//! been relaxed, in processing order. Observers are a side channel: they receive node ids only,
//! cannot touch the search state, and their failures are logged without aborting the search.

use crate::error::ObserverError;
use std::sync::mpsc::{Receiver, Sender};

pub type ObserverResult = Result<(), ObserverError>;

pub trait Observer<N> {
  fn node_processed(&mut self, node: N) -> ObserverResult;
}

impl<N, F: FnMut(N) -> ObserverResult> Observer<N> for F {
  fn node_processed(&mut self, node: N) -> ObserverResult {
    self(node)
  }
}

/// Forwards only every `n`-th processed node (the first one included), e.g. for frame capture.
pub struct EveryNth<O> {
  inner: O,
  every: usize,
  step: usize,
}

impl<O> EveryNth<O> {
  /// `every` of 0 is treated as 1.
  pub fn new(inner: O, every: usize) -> Self {
    Self {
      inner,
      every: every.max(1),
      step: 0,
    }
  }

  pub fn into_inner(self) -> O {
    self.inner
  }
}

impl<N, O: Observer<N>> Observer<N> for EveryNth<O> {
  fn node_processed(&mut self, node: N) -> ObserverResult {
    let step = self.step;
    self.step += 1;
    if step % self.every == 0 {
      return self.inner.node_processed(node);
    }
    Ok(())
  }
}

/// Sends processed node ids over a channel, so that a slow consumer (rendering, logging) can run
/// on another thread while the order of notifications is preserved.
pub struct ChannelObserver<N> {
  sender: Sender<N>,
}

impl<N> ChannelObserver<N> {
  pub fn new() -> (Self, Receiver<N>) {
    let (sender, receiver) = std::sync::mpsc::channel();
    (Self { sender }, receiver)
  }
}

impl<N: Send + Sync + 'static> Observer<N> for ChannelObserver<N> {
  fn node_processed(&mut self, node: N) -> ObserverResult {
    self.sender.send(node)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_closure_observer() {
    let mut seen = Vec::new();
    {
      let mut observer = |node: u32| -> ObserverResult {
        seen.push(node);
        Ok(())
      };
      observer.node_processed(1).unwrap();
      observer.node_processed(2).unwrap();
    }
    assert_eq!(seen, vec![1, 2]);
  }

  #[test]
  fn test_every_nth() {
    let (channel, receiver) = ChannelObserver::new();
    let mut observer = EveryNth::new(channel, 10);
    for node in 0..25u32 {
      observer.node_processed(node).unwrap();
    }

    let mut channel = observer.into_inner();
    channel.node_processed(99).unwrap();
    drop(channel);
    assert_eq!(receiver.iter().collect::<Vec<_>>(), vec![0, 10, 20, 99]);
  }

  #[test]
  fn test_every_nth_zero_forwards_all() {
    let (channel, receiver) = ChannelObserver::new();
    let mut observer = EveryNth::new(channel, 0);
    for node in 0..3u32 {
      observer.node_processed(node).unwrap();
    }

    drop(observer);
    assert_eq!(receiver.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
  }

  #[test]
  fn test_channel_observer() {
    let (mut observer, receiver) = ChannelObserver::new();
    for node in &[3u32, 1, 2] {
      observer.node_processed(*node).unwrap();
    }
    drop(observer);
    assert_eq!(receiver.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
  }

  #[test]
  fn test_channel_observer_disconnected() {
    let (mut observer, receiver) = ChannelObserver::<u32>::new();
    drop(receiver);
    assert!(observer.node_processed(1).is_err());
  }
}
