#![forbid(unsafe_code)]

pub mod cli;
pub mod collect;
pub mod dates;
pub mod formats;
pub mod logging;
pub mod posts;
pub mod prepare;
pub mod render;
pub mod text;
