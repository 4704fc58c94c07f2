mod service;

pub use service::FrameScheduler;
