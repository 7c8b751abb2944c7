pub mod app;
pub mod calendar;
pub mod completion;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod plan;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use completion::CompletionStore;
pub use plan::ReadingPlan;
pub use state::AppState;
pub use storage::{load_plan, resolve_plan_path};
