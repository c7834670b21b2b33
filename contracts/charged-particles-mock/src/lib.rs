#![no_std]

pub mod contract;
