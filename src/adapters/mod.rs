// Adapters layer: concrete implementations of the domain ports (storage, input store, clock).

pub mod clock;
pub mod input_store;
pub mod storage;
