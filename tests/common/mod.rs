#![allow(dead_code)]

pub mod pipe;
pub mod scripted;
pub mod setup;
pub mod templates;
