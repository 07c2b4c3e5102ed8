//! Currency rates containers.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{currency, Error};

/// Rates by currency code, as received from the API.
pub type Rates = BTreeMap<String, Decimal>;

/// Looks up a user-supplied code in `rates`.
fn lookup(rates: &Rates, currency: &str) -> Result<Option<Decimal>, Error> {
	let key = currency::normalize(currency)?;
	Ok(rates.get(&key).copied())
}

/// Rates for a single date, the response of the [`latest`](crate::Client::latest) and
/// [`historical`](crate::Client::historical) endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleDate {
	/// Amount of base currency being converted (1 when not specified).
	pub amount: Decimal,
	/// Base currency.
	pub base: String,
	/// Date of the rates.
	pub date: NaiveDate,
	/// What `amount` of `base` is worth in each currency. Never contains `base` itself.
	pub rates: Rates,
}

impl SingleDate {
	/// Gets the rate for the given currency.
	///
	/// The code is matched case-insensitively, ignoring surrounding whitespace. Returns
	/// [`None`] for a currency missing from the rates, and fails with
	/// [`Error::InvalidArgument`] for a blank code.
	pub fn get_rate(&self, currency: &str) -> Result<Option<Decimal>, Error> {
		lookup(&self.rates, currency)
	}

	/// Iterates over the currencies and their rates.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
		self.rates.iter().map(|(currency, rate)| (currency.as_str(), *rate))
	}

	/// Currency conversion through this snapshot.
	///
	/// The base currency counts as worth [`amount`](Self::amount). Returns [`None`] if either
	/// currency is missing.
	pub fn convert(&self, value: Decimal, from: &str, to: &str) -> Result<Option<Decimal>, Error> {
		let from_value = self.rate_or_amount(from)?;
		let to_value = self.rate_or_amount(to)?;
		Ok(from_value.zip(to_value).and_then(|(from_value, to_value)| {
			value.checked_mul(to_value)?.checked_div(from_value)
		}))
	}

	fn rate_or_amount(&self, currency: &str) -> Result<Option<Decimal>, Error> {
		let key = currency::normalize(currency)?;
		if key == self.base.to_uppercase() {
			Ok(Some(self.amount))
		} else {
			Ok(self.rates.get(&key).copied())
		}
	}
}

/// Rates over a range of dates, the response of the [`time_series`](crate::Client::time_series)
/// endpoint.
///
/// Only trading days are present: weekends and holidays have no entry in
/// [`rates`](Self::rates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
	/// Amount of base currency being converted (1 when not specified).
	pub amount: Decimal,
	/// Base currency.
	pub base: String,
	/// First date of the series.
	#[serde(rename = "start_date")]
	pub start_date: NaiveDate,
	/// Last date of the series.
	#[serde(rename = "end_date", default, skip_serializing_if = "Option::is_none")]
	pub end_date: Option<NaiveDate>,
	/// Rates by date.
	pub rates: BTreeMap<NaiveDate, Rates>,
}

impl TimeSeries {
	/// Gets the rates on the given date, if it was a trading day in the series.
	#[inline] pub fn get(&self, date: NaiveDate) -> Option<&Rates> { self.rates.get(&date) }

	/// Gets the rate for the given currency on the given date.
	///
	/// See [`SingleDate::get_rate`] for how the code is matched.
	pub fn get_rate(&self, date: NaiveDate, currency: &str) -> Result<Option<Decimal>, Error> {
		match self.get(date) {
			Some(rates) => lookup(rates, currency),
			None => currency::normalize(currency).map(|_| None),
		}
	}

	/// Iterates over the rates of the given currency, by date.
	///
	/// Dates without a rate for the currency are skipped.
	pub fn series(&self, currency: &str) -> Result<impl Iterator<Item = (NaiveDate, Decimal)> + '_, Error> {
		let key = currency::normalize(currency)?;
		Ok(self.rates.iter().filter_map(move |(date, rates)| rates.get(&key).map(|rate| (*date, *rate))))
	}

	/// The number of dates in the series.
	#[inline] pub fn len(&self) -> usize { self.rates.len() }

	/// Whether the series has no dates.
	#[inline] pub fn is_empty(&self) -> bool { self.rates.is_empty() }
}
