// Adapters layer: concrete view, storage and notification backends for the ports.

pub mod memory_view;
pub mod notifier;
pub mod storage;

pub use memory_view::MemoryView;
pub use notifier::{RecordingNotifier, TracingNotifier};
pub use storage::{FileStore, MemoryStore};
