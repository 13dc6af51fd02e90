//! Batch commit controller.
//!
//! A [`BatchWriter`] buffers rows of one table and hands them to the store in
//! multi-row inserts, either every N created rows or once the pending buffer
//! grows past a threshold, depending on its [`FlushPolicy`].

use sea_orm::DbErr;
use tracing::debug;

use crate::store::{Staged, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPolicy {
    /// Flush each time the number of created rows reaches a multiple of N.
    EveryRows(u64),
    /// Flush at [`BatchWriter::checkpoint`] when more than N rows are pending.
    PendingAbove(usize),
    /// Flush only at [`BatchWriter::finish`].
    AtEnd,
}

pub struct BatchWriter<'s, S: Store + ?Sized, T: Staged> {
    store: &'s S,
    policy: FlushPolicy,
    pending: Vec<T>,
    created: u64,
    flushes: u32,
}

impl<'s, S: Store + ?Sized, T: Staged> BatchWriter<'s, S, T> {
    pub fn new(store: &'s S, policy: FlushPolicy) -> Self {
        Self {
            store,
            policy,
            pending: Vec::new(),
            created: 0,
            flushes: 0,
        }
    }

    /// Stages one row, flushing if an [`FlushPolicy::EveryRows`] threshold is hit.
    pub async fn push(&mut self, row: T) -> Result<(), DbErr> {
        self.pending.push(row);
        self.created += 1;

        if let FlushPolicy::EveryRows(every) = self.policy {
            if every > 0 && self.created % every == 0 {
                self.flush().await?;
            }
        }
        Ok(())
    }

    /// Flushes if more rows are pending than a [`FlushPolicy::PendingAbove`] limit allows.
    pub async fn checkpoint(&mut self) -> Result<(), DbErr> {
        if let FlushPolicy::PendingAbove(limit) = self.policy {
            if self.pending.len() > limit {
                self.flush().await?;
            }
        }
        Ok(())
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Rows pushed so far, flushed or not.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Writes every pending row. An empty buffer is a no-op.
    pub async fn flush(&mut self) -> Result<u64, DbErr> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let rows = std::mem::take(&mut self.pending);
        let batch = T::into_batch(rows);
        let table = batch.table();
        let size = batch.len();

        let written = self.store.insert(batch).await?;
        self.flushes += 1;
        debug!(table = %table, rows = size, flush = self.flushes, "flushed batch");
        Ok(written)
    }

    /// Flushes the remainder and returns the total number of rows created.
    pub async fn finish(mut self) -> Result<u64, DbErr> {
        self.flush().await?;
        Ok(self.created)
    }
}
