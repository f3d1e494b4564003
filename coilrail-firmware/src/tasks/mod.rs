//! Embassy tasks

mod launch;

pub use launch::launch_task;
