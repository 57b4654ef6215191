//! Outer surfaces of the backend. Only the REST API exists today.

pub mod rest;
