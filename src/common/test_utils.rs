use crate::{
    alloc::{Global, SlotAllocator},
    AllocError,
};

use std::{cell::Cell, rc::Rc};

/// Tracks how many [`Tracked`] values were created and dropped.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    created: Cell<u32>,
    dropped: Cell<u32>,
}

impl Counters {
    pub(crate) fn created(&self) -> u32 {
        self.created.get()
    }

    pub(crate) fn dropped(&self) -> u32 {
        self.dropped.get()
    }

    pub(crate) fn alive(&self) -> u32 {
        self.created() - self.dropped()
    }

    fn incl_created(&self) {
        self.created.set(self.created.get() + 1);
    }

    fn incl_dropped(&self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

/// A value that reports its construction and destruction to shared counters.
#[derive(Debug)]
pub(crate) struct Tracked {
    id: u32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub(crate) fn new(id: u32, counters: &Rc<Counters>) -> Self {
        counters.incl_created();
        Self {
            id,
            counters: Rc::clone(counters),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.incl_dropped();
    }
}

/// A global allocator that counts the arrays it hands out.
#[derive(Debug, Default)]
pub(crate) struct CountingAllocator {
    allocations: Cell<usize>,
    slots_allocated: Cell<usize>,
}

impl CountingAllocator {
    pub(crate) fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub(crate) fn slots_allocated(&self) -> usize {
        self.slots_allocated.get()
    }
}

impl SlotAllocator for CountingAllocator {
    fn allocate_slots<T: Default>(&self, len: usize) -> Result<Box<[T]>, AllocError> {
        let slots = Global.allocate_slots(len)?;
        self.allocations.set(self.allocations.get() + 1);
        self.slots_allocated.set(self.slots_allocated.get() + len);
        Ok(slots)
    }
}
