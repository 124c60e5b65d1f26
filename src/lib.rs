//! Pinhole exposure calculator
//!
//! Computes f-stops and shutter times for pinhole cameras and draws a
//! film-shaped viewfinder frame in the terminal.
//!
//! Pure Core / Impure Shell: `model`, `exposure`, `viewfinder` and `state`
//! are pure; `storage`, `config`, `logging`, `view` and `commands` do I/O.

pub mod commands;
pub mod config;
pub mod exposure;
pub mod logging;
pub mod model;
pub mod state;
pub mod storage;
pub mod view;
pub mod viewfinder;
