pub mod page_snapshot;

pub use page_snapshot::PageSnapshot;
