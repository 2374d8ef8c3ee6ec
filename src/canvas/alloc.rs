use crate::foundation::pixel::Pixel;

/// Source of canvas storage.
///
/// A handle asks for exactly one block at initialization and hands it back through
/// [`CanvasAllocator::release`] at teardown. Returning `None` from `allocate` surfaces as
/// [`crate::OsdError::OutOfMemory`].
pub trait CanvasAllocator {
    /// Provide a block of exactly `len` pixels, or `None` if memory is unavailable.
    ///
    /// The contents need not be initialized to anything in particular; the handle clears it.
    fn allocate(&mut self, len: usize) -> Option<Box<[Pixel]>>;

    /// Take back a block previously returned by [`CanvasAllocator::allocate`].
    fn release(&mut self, block: Box<[Pixel]>);
}

impl<A: CanvasAllocator + ?Sized> CanvasAllocator for &mut A {
    fn allocate(&mut self, len: usize) -> Option<Box<[Pixel]>> {
        (**self).allocate(len)
    }

    fn release(&mut self, block: Box<[Pixel]>) {
        (**self).release(block)
    }
}

impl<A: CanvasAllocator + ?Sized> CanvasAllocator for Box<A> {
    fn allocate(&mut self, len: usize) -> Option<Box<[Pixel]>> {
        (**self).allocate(len)
    }

    fn release(&mut self, block: Box<[Pixel]>) {
        (**self).release(block)
    }
}

/// The global allocator, used fallibly: a failed reservation is reported, never aborted on.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl CanvasAllocator for SystemAllocator {
    fn allocate(&mut self, len: usize) -> Option<Box<[Pixel]>> {
        let mut block = Vec::new();
        block.try_reserve_exact(len).ok()?;
        block.resize(len, Pixel::TRANSPARENT);
        Some(block.into_boxed_slice())
    }

    fn release(&mut self, block: Box<[Pixel]>) {
        drop(block);
    }
}

/// Counters kept by [`BudgetAllocator`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Successful allocations.
    pub allocations: u64,
    /// Blocks handed back.
    pub releases: u64,
    /// Requests refused because they would exceed the budget.
    pub refused: u64,
    /// Bytes currently outstanding.
    pub bytes_in_use: usize,
    /// High-water mark of `bytes_in_use`.
    pub peak_bytes: usize,
}

/// Caps the bytes outstanding across all blocks it has handed out.
///
/// Intended for constrained targets where the OSD must live inside a fixed memory budget.
#[derive(Clone, Debug)]
pub struct BudgetAllocator {
    max_bytes: usize,
    stats: AllocStats,
}

impl BudgetAllocator {
    /// Allow at most `max_bytes` of outstanding canvas storage.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            stats: AllocStats::default(),
        }
    }

    /// Configured budget in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> AllocStats {
        self.stats.clone()
    }
}

impl CanvasAllocator for BudgetAllocator {
    fn allocate(&mut self, len: usize) -> Option<Box<[Pixel]>> {
        let bytes = block_bytes(len);
        let within_budget = bytes
            .and_then(|b| self.stats.bytes_in_use.checked_add(b))
            .filter(|&total| total <= self.max_bytes);
        let (Some(bytes), Some(total)) = (bytes, within_budget) else {
            self.stats.refused = self.stats.refused.saturating_add(1);
            return None;
        };

        let Some(block) = SystemAllocator.allocate(len) else {
            self.stats.refused = self.stats.refused.saturating_add(1);
            return None;
        };

        debug_assert_eq!(block.len() * size_of::<Pixel>(), bytes);
        self.stats.allocations = self.stats.allocations.saturating_add(1);
        self.stats.bytes_in_use = total;
        self.stats.peak_bytes = self.stats.peak_bytes.max(total);
        Some(block)
    }

    fn release(&mut self, block: Box<[Pixel]>) {
        let bytes = block_bytes(block.len()).unwrap_or(usize::MAX);
        self.stats.releases = self.stats.releases.saturating_add(1);
        self.stats.bytes_in_use = self.stats.bytes_in_use.saturating_sub(bytes);
        drop(block);
    }
}

fn block_bytes(len: usize) -> Option<usize> {
    len.checked_mul(size_of::<Pixel>())
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/alloc.rs"]
mod tests;
