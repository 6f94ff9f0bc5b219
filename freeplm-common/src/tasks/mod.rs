//! Task completion notifications.
//!
//! A task that finishes asynchronously or on another thread announces its
//! outcome through a [`TaskCompletedEvent`]. The event carries a
//! [`TaskCompletedEventArgs`] with the task's result and optional error.
//!
//! This is a plain observer scaffold: it does not schedule, order or
//! synchronise the tasks themselves.
//!
//! ```
//! use freeplm_common::tasks::{TaskCompletedEvent, TaskCompletedEventArgs, TaskCompletedEvents};
//!
//! struct ExportTask {
//!     completed: TaskCompletedEvent<String>,
//! }
//!
//! impl TaskCompletedEvents for ExportTask {
//!     type Output = String;
//!
//!     fn task_completed(&self) -> &TaskCompletedEvent<String> {
//!         &self.completed
//!     }
//! }
//!
//! let task = ExportTask { completed: TaskCompletedEvent::new() };
//! task.task_completed().subscribe(|sender, args| {
//!     assert!(sender.downcast_ref::<ExportTask>().is_some());
//!     println!("export finished: {:?}", args.result);
//! });
//! task.on_task_completed(&TaskCompletedEventArgs::success("parts.csv".to_string()));
//! ```

mod completed;

pub use completed::{
    SubscriptionId, TaskCompletedEvent, TaskCompletedEventArgs, TaskCompletedEvents, TaskError,
};
