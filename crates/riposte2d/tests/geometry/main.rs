#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod bounds_combination;
mod circle_rasterization;
mod classification;
mod custom_dispatcher;
mod path_containment;
