//! State dataset: record model and the load-once store.
pub mod records;
pub mod store;

pub use records::{MunicipalityRecord, RegionStatus, StateMetrics, StateRecord, YearMetrics};
pub use store::{DatasetError, DatasetSource, DatasetStore};
