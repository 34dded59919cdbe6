#![allow(dead_code)]

pub mod model_fixture;
pub mod qr_fixture;
