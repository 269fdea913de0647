mod notification;
mod poll;
mod scheduler;

pub use notification::{Notifier, NtfyNotifier};
pub use poll::{AccountError, CycleStats, FeedFetch, PollService};
pub use scheduler::{JobResult, PollJob, SchedulerJob, SchedulerService};
