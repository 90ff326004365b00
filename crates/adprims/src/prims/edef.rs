//! EdefExample: identity primitive for exercising triad dispatch.
//!
//! Trivially correct numerics; not meant for production programs.

pub fn primal(x: f64) -> f64 {
    x
}

pub fn forward(_x: f64, dx: f64) -> f64 {
    dx
}

pub fn reverse(_x: f64, ddr: f64) -> f64 {
    ddr
}
