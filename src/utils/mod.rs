//! Utility types for profiling

mod profiler;

pub use profiler::Profiler;
