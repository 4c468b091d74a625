#![allow(dead_code)]

use rational_macros::Series;

#[derive(Series)]
pub struct BadSample {
    pub time: f64,
    pub count: u32,
}

fn main() {}
