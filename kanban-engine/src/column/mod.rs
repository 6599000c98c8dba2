//! Column operations

mod add;
mod delete;
