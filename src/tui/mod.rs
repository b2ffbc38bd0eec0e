pub mod app;
pub mod filter;
pub mod focus;
pub mod header;
pub mod input;
pub mod render;
pub mod tag;
pub mod task;
pub mod task_list;
pub mod text_edit;
pub mod theme;

pub use app::run;
