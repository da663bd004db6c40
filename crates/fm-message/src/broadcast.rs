//! Write-many / read-all channel.

/// A channel whose every sealed record is visible to every reader.
///
/// ```rust
/// use fm_message::BroadcastChannel;
///
/// let mut ch = BroadcastChannel::new();
/// ch.publish(1u32);
/// ch.publish(2u32);
/// assert_eq!(ch.all().count(), 0); // not sealed yet
/// ch.seal();
/// assert_eq!(ch.all().copied().collect::<Vec<_>>(), [1, 2]);
/// ```
pub struct BroadcastChannel<M> {
    /// Records published during the current layer.
    pending:    Vec<M>,
    /// Frozen output of the previous layer.
    sealed:     Vec<M>,
    generation: u64,
}

impl<M> Default for BroadcastChannel<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> BroadcastChannel<M> {
    pub fn new() -> Self {
        Self {
            pending:    Vec::new(),
            sealed:     Vec::new(),
            generation: 0,
        }
    }

    /// Pre-allocate both buffers for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending:    Vec::with_capacity(capacity),
            sealed:     Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Append a record to the current layer's buffer.
    #[inline]
    pub fn publish(&mut self, msg: M) {
        self.pending.push(msg);
    }

    /// Freeze the current buffer as the readable snapshot.
    ///
    /// The previous snapshot is discarded.  Returns the number of records
    /// sealed.
    pub fn seal(&mut self) -> usize {
        self.sealed.clear();
        std::mem::swap(&mut self.sealed, &mut self.pending);
        self.generation += 1;
        self.sealed.len()
    }

    /// Every record sealed by the last [`seal`](Self::seal).
    ///
    /// Readers must not depend on the order; it is the publish order, which
    /// the scheduler keeps in `AgentId` order.
    pub fn all(&self) -> std::slice::Iter<'_, M> {
        self.sealed.iter()
    }

    /// Number of readable records.
    pub fn len(&self) -> usize {
        self.sealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sealed.is_empty()
    }

    /// Records published since the last seal.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop both buffers.  Called between steps so nothing leaks across them.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.sealed.clear();
    }

    /// Number of seals performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<M> Extend<M> for BroadcastChannel<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
