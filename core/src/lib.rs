//! casino-core: the simulation library behind the casino runner.
//!
//! Pure and deterministic: no I/O, no platform randomness. Callers
//! seed a [`rng::TableRng`], hand it to [`slots::simulate_slots`],
//! [`roulette::simulate_roulette`], or [`campaign::run_campaign`],
//! and get back results plus an ordered event trace. Printing is the
//! caller's job.

pub mod campaign;
pub mod config;
pub mod error;
pub mod event;
pub mod report;
pub mod rng;
pub mod roulette;
pub mod session;
pub mod slots;
pub mod types;
