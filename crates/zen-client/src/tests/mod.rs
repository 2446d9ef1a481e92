mod clock;
mod file_storage;
mod memory_storage;

use crate::{ManualClock, MemoryStorage, Storage};

use std::sync::Arc;

/// 2024-01-01T00:00:00Z
pub(crate) const START_MILLIS: i64 = 1_704_067_200_000;

pub(crate) fn storage() -> (Arc<MemoryStorage>, Arc<dyn Storage>) {
    let memory = Arc::new(MemoryStorage::new());
    let storage: Arc<dyn Storage> = memory.clone();
    (memory, storage)
}

pub(crate) fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(START_MILLIS))
}
