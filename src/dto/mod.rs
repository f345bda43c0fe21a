//! DTOs shaped for the templates.

pub mod character;
