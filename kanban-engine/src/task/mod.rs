//! Task operations

mod add;
mod delete;
mod mv;
mod reorder;
