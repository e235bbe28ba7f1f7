//! Unit tests, one module per concern.

mod custom;
