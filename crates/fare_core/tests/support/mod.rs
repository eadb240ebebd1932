#![allow(dead_code)]

pub mod points;
