
/// This module contains functionality related to acquiring GNSS signals common to all systems
pub mod common;

pub mod gps_l1_ca;
