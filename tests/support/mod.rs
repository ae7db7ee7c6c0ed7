#![allow(dead_code)]

pub mod mock_surface;
pub mod recorder;
