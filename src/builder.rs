//! Incremental, reversible editing of a [`FullName`].
//!
//! A builder starts open, applies editing operations against its current
//! state, records every accepted edit in a per-builder history, and pushes
//! each new state to all broadcast subscribers. Finalizing (or closing)
//! releases the history and the channel; nothing reopens a closed builder.

use rand::{Rng, distr::Alphanumeric};
use tokio::sync::broadcast;
use tracing::debug;

use crate::config::{Config, NameOrder};
use crate::constants::{BUILDER_CHANNEL_CAPACITY, HISTORY_ID_LENGTH};
use crate::error::NameError;
use crate::full_name::FullName;
use crate::parser;

/// One accepted edit: the state it produced and the state it replaced.
#[derive(Debug, Clone)]
pub struct BuilderState {
    pub id: String,
    pub operation: &'static str,
    pub current: FullName,
    pub previous: Option<FullName>,
}

fn entry_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(HISTORY_ID_LENGTH)
        .map(char::from)
        .collect()
}

pub struct NameBuilder {
    context: FullName,
    history: Vec<BuilderState>,
    // Some while open; dropping the sender is what closes the channel.
    channel: Option<broadcast::Sender<FullName>>,
}

impl NameBuilder {
    /// Wraps an already-parsed name. The initial state becomes the first
    /// history entry, so a rollback never runs out of states to restore.
    pub fn new(initial: FullName) -> Self {
        let (sender, _) = broadcast::channel(BUILDER_CHANNEL_CAPACITY);
        let history = vec![BuilderState {
            id: entry_id(),
            operation: "open",
            current: initial.clone(),
            previous: None,
        }];
        NameBuilder {
            context: initial,
            history,
            channel: Some(sender),
        }
    }

    /// Parses `text` under `config` and wraps the result.
    pub fn from_text(text: &str, config: &Config) -> Result<Self, NameError> {
        Ok(NameBuilder::new(parser::from_text(text, config)?))
    }

    pub fn is_open(&self) -> bool {
        self.channel.is_some()
    }

    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    /// The name as of the latest accepted edit.
    pub fn current(&self) -> &FullName {
        &self.context
    }

    /// The append-only edit log. Empty once the builder is closed.
    pub fn history(&self) -> &[BuilderState] {
        &self.history
    }

    /// Attaches a subscriber that receives every state accepted from now on.
    pub fn subscribe(&self) -> Result<broadcast::Receiver<FullName>, NameError> {
        self.channel
            .as_ref()
            .map(broadcast::Sender::subscribe)
            .ok_or_else(|| NameError::not_allowed("subscribe", "builder is closed"))
    }

    /// Re-renders the current name under `order` without touching the shared
    /// configuration.
    pub fn reorder(&mut self, order: NameOrder) -> Result<&FullName, NameError> {
        self.ensure_open("reorder")?;
        let next = self.context.reordered(order);
        self.accept("reorder", next)
    }

    /// Drops everything but the first and last names.
    pub fn shorten(&mut self) -> Result<&FullName, NameError> {
        self.ensure_open("shorten")?;
        let next = self.context.shortened();
        self.accept("shorten", next)
    }

    pub fn uppercase(&mut self) -> Result<&FullName, NameError> {
        self.ensure_open("uppercase")?;
        let next = self.context.uppercased();
        self.accept("uppercase", next)
    }

    pub fn lowercase(&mut self) -> Result<&FullName, NameError> {
        self.ensure_open("lowercase")?;
        let next = self.context.lowercased();
        self.accept("lowercase", next)
    }

    /// Reverses the name order and toggles the stored order option. Each
    /// name captures its order when it is built, so siblings that already
    /// exist keep theirs; names parsed under this configuration afterwards
    /// pick up the toggled order.
    pub fn flip(&mut self) -> Result<&FullName, NameError> {
        self.ensure_open("flip")?;
        let next = self.context.flipped();
        next.config().set_order(next.order());
        self.accept("flip", next)
    }

    /// Discards the most recent edit and restores the one before it. With
    /// only the initial state left this is a no-op that re-publishes it.
    pub fn rollback(&mut self) -> Result<&FullName, NameError> {
        self.ensure_open("rollback")?;
        if self.history.len() > 1 {
            let dropped = self.history.pop();
            if let Some(entry) = dropped {
                debug!(id = %entry.id, operation = entry.operation, "rolled back");
            }
        }
        if let Some(tail) = self.history.last() {
            self.context = tail.current.clone();
        }
        self.publish();
        Ok(&self.context)
    }

    /// Closes the builder for good: releases the history, drops the channel
    /// (subscribers observe it as closed) and hands back the final name.
    pub fn finalize(&mut self) -> Result<FullName, NameError> {
        self.ensure_open("finalize")?;
        self.channel = None;
        self.history = Vec::new();
        Ok(self.context.clone())
    }

    /// Same as [`NameBuilder::finalize`], discarding the final name.
    pub fn close(&mut self) -> Result<(), NameError> {
        self.ensure_open("close")?;
        self.channel = None;
        self.history = Vec::new();
        Ok(())
    }

    fn ensure_open(&self, operation: &'static str) -> Result<(), NameError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(NameError::not_allowed(operation, "builder is closed"))
        }
    }

    fn accept(&mut self, operation: &'static str, next: FullName) -> Result<&FullName, NameError> {
        let previous = std::mem::replace(&mut self.context, next);
        let entry = BuilderState {
            id: entry_id(),
            operation,
            current: self.context.clone(),
            previous: Some(previous),
        };
        debug!(id = %entry.id, operation, "edit accepted");
        self.history.push(entry);
        self.publish();
        Ok(&self.context)
    }

    fn publish(&self) {
        if let Some(sender) = &self.channel {
            // A send only fails when no subscriber is attached, which is fine.
            let _ = sender.send(self.context.clone());
        }
    }
}
