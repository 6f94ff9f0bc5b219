//! Task completion event and its arguments.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Error reported by a finished task.
pub type TaskError = Arc<dyn Error + Send + Sync>;

/// Outcome passed to task completion handlers.
#[derive(Debug, Clone)]
pub struct TaskCompletedEventArgs<R> {
    /// Result of the task, `None` if it produced none
    pub result: Option<R>,
    /// Error encountered while running the task, if any
    pub error: Option<TaskError>,
}

impl<R> TaskCompletedEventArgs<R> {
    /// Completed with a result and no error.
    pub fn success(result: R) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// Completed with an error and no result.
    pub fn failure<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            result: None,
            error: Some(Arc::new(error)),
        }
    }

    /// Completed without result or error.
    pub fn empty() -> Self {
        Self {
            result: None,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl<R> Default for TaskCompletedEventArgs<R> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Handle returned by [`TaskCompletedEvent::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<R> = Arc<dyn Fn(&dyn Any, &TaskCompletedEventArgs<R>) + Send + Sync>;

/// Notification point fired when a task finishes.
///
/// Each handler receives the sender, usually the task that finished, and
/// can recover its concrete type with [`Any::downcast_ref`]. Handlers run synchronously on the raising thread, in subscription order.
/// The handler list is snapshotted before the first handler runs, so
/// handlers may subscribe or unsubscribe while the event is being raised;
/// such changes apply from the next raise.
pub struct TaskCompletedEvent<R> {
    handlers: RwLock<Vec<(SubscriptionId, Handler<R>)>>,
    next_id: AtomicU64,
}

impl<R> TaskCompletedEvent<R> {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Add a handler.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&dyn Any, &TaskCompletedEventArgs<R>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let handler: Handler<R> = Arc::new(handler);
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));
        id
    }

    /// Remove a handler. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Invoke every subscribed handler with `sender` and `args`.
    pub fn raise(&self, sender: &dyn Any, args: &TaskCompletedEventArgs<R>) {
        let handlers: Vec<Handler<R>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        if handlers.is_empty() {
            return;
        }

        tracing::trace!(
            subscribers = handlers.len(),
            failed = args.error.is_some(),
            "Raising task completed event"
        );

        for handler in handlers {
            handler(sender, args);
        }
    }
}

impl<R> Default for TaskCompletedEvent<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for TaskCompletedEvent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskCompletedEvent")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Base behaviour for tasks that announce their completion.
///
/// Implementors own a [`TaskCompletedEvent`] and call
/// [`on_task_completed`](Self::on_task_completed) when they finish.
pub trait TaskCompletedEvents {
    /// Result type carried by the completion event.
    type Output;

    /// The task's completion event, for subscribing.
    fn task_completed(&self) -> &TaskCompletedEvent<Self::Output>;

    /// Notify subscribers that the task finished, with `self` as sender.
    fn on_task_completed(&self, args: &TaskCompletedEventArgs<Self::Output>)
    where
        Self: Sized + 'static,
    {
        self.task_completed().raise(self, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;
    use std::thread;

    struct ChecksumTask {
        input: Vec<u8>,
        completed: TaskCompletedEvent<u32>,
    }

    impl ChecksumTask {
        fn new(input: &[u8]) -> Self {
            Self {
                input: input.to_vec(),
                completed: TaskCompletedEvent::new(),
            }
        }

        fn run(&self) {
            if self.input.is_empty() {
                let error = io::Error::new(io::ErrorKind::InvalidInput, "empty input");
                self.on_task_completed(&TaskCompletedEventArgs::failure(error));
            } else {
                let sum: u32 = self.input.iter().map(|b| *b as u32).sum();
                self.on_task_completed(&TaskCompletedEventArgs::success(sum));
            }
        }
    }

    impl TaskCompletedEvents for ChecksumTask {
        type Output = u32;

        fn task_completed(&self) -> &TaskCompletedEvent<u32> {
            &self.completed
        }
    }

    #[test]
    fn test_handler_receives_result() {
        let task = ChecksumTask::new(&[1, 2, 3]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        task.task_completed().subscribe(move |_, args| {
            sink.lock().unwrap().push(args.result);
        });

        task.run();

        assert_eq!(*seen.lock().unwrap(), vec![Some(6)]);
    }

    #[test]
    fn test_handler_receives_error() {
        let task = ChecksumTask::new(&[]);
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        task.task_completed().subscribe(move |_, args| {
            assert!(!args.is_success());
            assert!(args.result.is_none());
            *sink.lock().unwrap() = args.error.as_ref().map(|e| e.to_string());
        });

        task.run();

        assert_eq!(seen.lock().unwrap().as_deref(), Some("empty input"));
    }

    #[test]
    fn test_handler_receives_task_as_sender() {
        let task = ChecksumTask::new(&[4, 5]);
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        task.task_completed().subscribe(move |sender, _| {
            let task = sender
                .downcast_ref::<ChecksumTask>()
                .expect("sender is the finished task");
            *sink.lock().unwrap() = Some(task.input.clone());
        });

        task.run();

        assert_eq!(*seen.lock().unwrap(), Some(vec![4, 5]));
    }

    #[test]
    fn test_sender_passed_to_raise_reaches_handlers() {
        let event = TaskCompletedEvent::<()>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        event.subscribe(move |sender, _| {
            sink.lock().unwrap().push(sender.downcast_ref::<&str>().copied());
        });

        event.raise(&"import", &TaskCompletedEventArgs::empty());
        event.raise(&7u8, &TaskCompletedEventArgs::empty());

        assert_eq!(*seen.lock().unwrap(), vec![Some("import"), None]);
    }

    #[test]
    fn test_raise_without_subscribers_is_noop() {
        let task = ChecksumTask::new(&[9]);
        task.run();
        assert_eq!(task.task_completed().subscriber_count(), 0);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let event = TaskCompletedEvent::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..3 {
            let order = Arc::clone(&order);
            event.subscribe(move |_, _| order.lock().unwrap().push(n));
        }

        event.raise(&(), &TaskCompletedEventArgs::empty());

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribed_handler_is_not_called() {
        let event = TaskCompletedEvent::<()>::new();
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let id = event.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(event.unsubscribe(id));
        assert!(!event.unsubscribe(id));
        event.raise(&(), &TaskCompletedEventArgs::empty());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(event.subscriber_count(), 0);
    }

    #[test]
    fn test_handler_may_subscribe_during_raise() {
        let event = Arc::new(TaskCompletedEvent::<()>::new());
        let inner = Arc::clone(&event);
        event.subscribe(move |_, _| {
            inner.subscribe(|_, _| {});
        });

        event.raise(&(), &TaskCompletedEventArgs::empty());

        assert_eq!(event.subscriber_count(), 2);
    }

    #[test]
    fn test_concurrent_raise_delivers_every_event() {
        let event = Arc::new(TaskCompletedEvent::<u64>::new());
        let total = Arc::new(AtomicU64::new(0));
        let sum = Arc::clone(&total);
        event.subscribe(move |_, args| {
            sum.fetch_add(args.result.unwrap_or_default(), Ordering::SeqCst);
        });

        let threads: Vec<_> = (1..=4u64)
            .map(|n| {
                let event = Arc::clone(&event);
                thread::spawn(move || {
                    for _ in 0..100 {
                        event.raise(&n, &TaskCompletedEventArgs::success(n));
                    }
                })
            })
            .collect();
        for handle in threads {
            handle.join().unwrap();
        }

        assert_eq!(total.load(Ordering::SeqCst), 100 * (1 + 2 + 3 + 4));
    }

    #[test]
    fn test_default_args_are_empty_success() {
        let args = TaskCompletedEventArgs::<String>::default();
        assert!(args.result.is_none());
        assert!(args.is_success());
    }

    #[test]
    fn test_event_debug_shows_subscriber_count() {
        let event = TaskCompletedEvent::<()>::new();
        event.subscribe(|_, _| {});
        assert_eq!(format!("{:?}", event), "TaskCompletedEvent { subscribers: 1 }");
    }
}
