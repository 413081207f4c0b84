/*!
 * Core Types
 * Common types used across the simulator
 */

/// Task identifier, assigned by the caller and never reused
pub type TaskId = u32;

/// Virtual clock unit (arrival, burst, completion and waiting times)
pub type Tick = u64;

/// Task priority (caller-defined scale, higher is more important)
pub type Priority = i32;

/// Common result type for simulator operations outside the core algorithms
pub type SimResult<T> = Result<T, super::errors::SimError>;
