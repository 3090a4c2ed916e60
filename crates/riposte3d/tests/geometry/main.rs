#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod bounds_combination;
mod classification;
mod sphere_rasterization;
