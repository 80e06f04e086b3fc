//! Route handlers

pub mod leads;
pub mod pages;
