//! Services

pub mod news;
pub mod newsapi;
