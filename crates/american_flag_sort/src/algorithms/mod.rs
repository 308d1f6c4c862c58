pub mod common;
pub mod recursive;
pub mod work_stack;
