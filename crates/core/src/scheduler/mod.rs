//! Scheduling session facade

pub mod service;

pub use service::SchedulerService;
