//! Overlay core: pure page matching, arbitration, and visual state.
mod activation;
mod arbiter;
mod bar;
mod page;
mod tasks;

pub use activation::ActivationRule;
pub use arbiter::{Generation, TrackerArbiter};
pub use bar::{visual_for, BarVisual, ProgressBar, ProgressSurface};
pub use page::{encode_page_label, ActivePageProbe, RelevanceFilter};
pub use tasks::{Task, TaskSet};
