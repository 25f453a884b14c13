//! Fetches the FMI heating degree-day feed and resolves single
//! location/month values out of the yearly CSV files.

pub mod fetch;
pub mod process;
pub mod resolve;
pub mod state;
