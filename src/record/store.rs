use super::{ChainLink, MappedRead, ReadHandle};
use crate::classify::PairRole;

/// Arena owning every mapped read created through it.
///
/// Slots are never reused while the store is alive, so a [`ReadHandle`]
/// stays valid until the record behind it is released by a chain teardown.
#[derive(Debug, Default)]
pub struct ReadStore {
    slots: Vec<Option<MappedRead>>,
    live: usize,
}

impl ReadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record, copying all string inputs so the store owns
    /// independent storage.
    ///
    /// When `prev` names the current ingestion tail, the new record is
    /// appended behind it; no traversal happens, so callers must pass the
    /// actual tail. Lengths and group are stored verbatim, unvalidated.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        seq_id: &str,
        seq: Option<&str>,
        qual: Option<&str>,
        id_len: u16,
        seq_len: u16,
        qual_len: u16,
        role: PairRole,
        group: u16,
        prev: Option<ReadHandle>,
    ) -> ReadHandle {
        let handle = ReadHandle(self.slots.len() as u32);
        self.slots.push(Some(MappedRead {
            seq_id: seq_id.to_string(),
            seq: seq.map(str::to_string),
            qual: qual.map(str::to_string),
            id_len,
            seq_len,
            qual_len,
            role,
            group,
            next_read: None,
            next_print_read: None,
            partner: None,
        }));
        self.live += 1;

        if let Some(prev) = prev {
            if let Some(tail) = self.slot_mut(prev) {
                tail.next_read = Some(handle);
            }
        }

        handle
    }

    /// Number of live records in the store.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn get(&self, handle: ReadHandle) -> Option<&MappedRead> {
        self.slots.get(handle.0 as usize).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, handle: ReadHandle) -> Option<&mut MappedRead> {
        self.slots.get_mut(handle.0 as usize).and_then(Option::as_mut)
    }

    /// Successor along the ingestion chain.
    pub fn next_read(&self, handle: ReadHandle) -> Option<ReadHandle> {
        self.get(handle).and_then(|r| r.next_read)
    }

    /// Successor along the print chain.
    pub fn next_print_read(&self, handle: ReadHandle) -> Option<ReadHandle> {
        self.get(handle).and_then(|r| r.next_print_read)
    }

    /// Points `base`'s print-chain link at `next` (or clears it).
    ///
    /// Reassignment is unrestricted; keeping the print chain acyclic is the
    /// caller's contract.
    pub fn set_next_print_read(&mut self, base: ReadHandle, next: Option<ReadHandle>) {
        if let Some(read) = self.slot_mut(base) {
            read.next_print_read = next;
        }
    }

    pub fn set_partner(&mut self, handle: ReadHandle, mate: ReadHandle) {
        if let Some(read) = self.slot_mut(handle) {
            read.partner = Some(mate);
        }
    }

    /// The mate of a paired read. `None` is the normal state for unpaired
    /// reads, not an error.
    pub fn partner(&self, handle: ReadHandle) -> Option<ReadHandle> {
        self.get(handle).and_then(|r| r.partner)
    }

    /// Whether a partner exists and is binned into the same group.
    pub fn partner_in_same_group(&self, handle: ReadHandle) -> bool {
        match self.get(handle) {
            Some(read) => match read.partner.and_then(|p| self.get(p)) {
                Some(mate) => mate.group == read.group,
                None => false,
            },
            None => false,
        }
    }

    /// Iterates handles from `head` along one link field.
    pub fn iter_chain(&self, head: Option<ReadHandle>, link: ChainLink) -> ChainIter<'_> {
        ChainIter {
            store: self,
            cursor: head,
            link,
        }
    }

    /// Number of records reachable from `head` along one link field.
    pub fn chain_len(&self, head: Option<ReadHandle>, link: ChainLink) -> usize {
        self.iter_chain(head, link).count()
    }

    /// Releases every record reachable from `head` along the chosen link
    /// field, exactly once each, in chain order.
    ///
    /// A `None` head is a no-op. Each node's owned strings are dropped with
    /// it; handles into the destroyed chain go dead. A slot that was
    /// already released ends the walk, so re-running a teardown cannot
    /// release anything twice.
    pub fn destroy_chain(&mut self, head: Option<ReadHandle>, link: ChainLink) {
        let mut cursor = head;
        while let Some(handle) = cursor {
            let taken = self
                .slots
                .get_mut(handle.0 as usize)
                .and_then(Option::take);
            cursor = match taken {
                Some(read) => {
                    self.live -= 1;
                    read.link(link)
                }
                None => None,
            };
        }
    }
}

/// Iterator over the handles of one chain.
pub struct ChainIter<'a> {
    store: &'a ReadStore,
    cursor: Option<ReadHandle>,
    link: ChainLink,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = ReadHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        self.cursor = self.store.get(handle).and_then(|r| r.link(self.link));
        Some(handle)
    }
}
