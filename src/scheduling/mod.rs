mod controller;
mod scheduler;
mod worker;

pub use controller::ReminderJobController;
pub use worker::{PushWorker, RandomReminderWorker};
