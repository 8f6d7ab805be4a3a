pub mod mutation;
pub mod task;
pub mod zone;
