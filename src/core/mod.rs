pub mod aggregate;
pub mod builtin;
pub mod catalog;
pub mod city;
pub mod classify;
pub mod delta;
pub mod display;
pub mod focus;
pub mod mapping;
pub mod types;
