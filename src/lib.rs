//! [Frankfurter](https://www.frankfurter.app/) exchange-rate API library.
//!
//! # Examples
//! ```no_run
//! # async fn run() -> Result<(), frankfurter::Error> {
//! use frankfurter::{Client, Params};
//!
//! let client = Client::new();
//! let latest = client.latest(&Params::default().to_currencies(["USD", "GBP"])).await?;
//! println!("1 EUR = {:?} USD", latest.get_rate("usd")?);
//! # Ok(()) }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod currency;
mod error;
pub mod network;
pub mod query;
pub mod rates;

pub use client::{latest_rate, min_date, rate_for, Client, Params};
pub use currency::EUR;
pub use error::Error;
pub use network::{Network, NetworkApi};
pub use query::QueryBuilder;
pub use rates::{Rates, SingleDate, TimeSeries};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
