/// A handle to a scheduled frame task.
///
/// Handles are generation-tagged: once a task has run or been cancelled, its handle never
/// matches a later task that reuses the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle {
    slot: usize,
    generation: u64,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u64,
    task: Option<T>,
}

/// A cancellable, single-threaded frame scheduler (the `requestAnimationFrame` queue).
///
/// Tasks requested during a frame run in the next one. Cancelling is synchronous: a task
/// cancelled before [`FrameScheduler::take_due`] is never returned.
#[derive(Clone, Debug)]
pub struct FrameScheduler<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    next_generation: u64,
    len: usize,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            next_generation: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Schedules `task` for the next frame.
    pub fn request(&mut self, task: T) -> FrameHandle {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.len += 1;

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Slot {
                    generation,
                    task: Some(task),
                };
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation,
                    task: Some(task),
                });
                self.slots.len() - 1
            }
        };
        vtrace!(slot, generation, "frame requested");
        FrameHandle { slot, generation }
    }

    pub fn is_scheduled(&self, handle: FrameHandle) -> bool {
        self.slots
            .get(handle.slot)
            .is_some_and(|s| s.generation == handle.generation && s.task.is_some())
    }

    /// Cancels a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if !self.is_scheduled(handle) {
            return false;
        }
        self.slots[handle.slot].task = None;
        self.free.push(handle.slot);
        self.len -= 1;
        vtrace!(slot = handle.slot, "frame cancelled");
        true
    }

    /// Removes and returns every pending task in request order.
    pub fn take_due(&mut self) -> Vec<(FrameHandle, T)> {
        let mut due = Vec::with_capacity(self.len);
        for (slot, s) in self.slots.iter_mut().enumerate() {
            if let Some(task) = s.task.take() {
                due.push((
                    FrameHandle {
                        slot,
                        generation: s.generation,
                    },
                    task,
                ));
                self.free.push(slot);
            }
        }
        self.len = 0;
        due.sort_unstable_by_key(|(h, _)| h.generation);
        due
    }
}
