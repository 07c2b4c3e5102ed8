//! The [`Client`] for the [Frankfurter](https://www.frankfurter.app/docs/) endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
	currency::{self, EUR},
	query::date_text,
	Error, Network, NetworkApi, QueryBuilder, SingleDate, TimeSeries,
};

const FROM: &str = "from";
const TO: &str = "to";
const AMOUNT: &str = "amount";

/// The first date the API has rates for.
pub fn min_date() -> NaiveDate {
	NaiveDate::from_ymd_opt(1999, 1, 4).expect("1999-01-04 is a valid date")
}

fn check_min_date(argument: &'static str, date: NaiveDate) -> Result<(), Error> {
	if date < min_date() {
		return Err(Error::OutOfRange {
			argument,
			message: format!("minimum date is {}", date_text(min_date())),
		});
	}
	Ok(())
}

/// Optional request parameters shared by the rates endpoints.
///
/// # Examples
/// ```
/// # use frankfurter::Params;
/// # use rust_decimal::Decimal;
/// let params = Params::default().base_currency("USD").to_currencies(["GBP", "JPY"]).amount(Decimal::TEN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
	/// The currency to convert from. Sent as given; pass an uppercase code.
	pub base_currency: String,
	/// The currencies to convert to (empty for all).
	pub to_currencies: Vec<String>,
	/// The amount of base currency to convert.
	pub amount: Decimal,
}

/// Euro to all currencies, for an amount of 1.
impl Default for Params {
	fn default() -> Self {
		Self {
			base_currency: EUR.to_owned(),
			to_currencies: Vec::new(),
			amount: Decimal::ONE,
		}
	}
}

impl Params {
	/// Sets the [`base_currency`](Params::base_currency).
	pub fn base_currency(mut self, base_currency: impl Into<String>) -> Self {
		self.base_currency = base_currency.into();
		self
	}

	/// Sets the [`to_currencies`](Params::to_currencies).
	pub fn to_currencies<I, S>(mut self, to_currencies: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.to_currencies = to_currencies.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the [`amount`](Params::amount).
	pub fn amount(mut self, amount: Decimal) -> Self {
		self.amount = amount;
		self
	}

	/// The same parameters, targeting only `currency`.
	fn single_currency(&self, currency: &str) -> Self {
		self.clone().to_currencies([currency])
	}

	/// Writes the parameters that differ from the API defaults.
	fn write_query(&self, query: QueryBuilder) -> QueryBuilder {
		query
			.add_unless(FROM, self.base_currency.as_str(), EUR)
			.add_range(TO, &self.to_currencies)
			.add_unless(AMOUNT, self.amount, Decimal::ONE)
	}
}

/// A [Frankfurter](https://www.frankfurter.app/) API client.
///
/// Every operation validates its arguments, then issues exactly one request through the
/// [`Network`]. The network is released when the client is dropped.
#[derive(Debug, Default)]
pub struct Client<N = NetworkApi> {
	network: N,
}

impl Client {
	/// Creates a new [`Client`] for the public API.
	pub fn new() -> Self { Self::with_network(NetworkApi::new()) }
}

impl<N: Network> Client<N> {
	/// Creates a new [`Client`] over the given [`Network`].
	#[inline] pub fn with_network(network: N) -> Self { Self { network } }

	/// The underlying [`Network`].
	#[inline] pub fn network(&self) -> &N { &self.network }

	/// Unwraps the underlying [`Network`].
	#[inline] pub fn into_inner(self) -> N { self.network }

	/// Gets the supported currencies: names by code. ― [Currencies docs](https://www.frankfurter.app/docs/#currencies).
	pub async fn currencies(&self) -> Result<BTreeMap<String, String>, Error> {
		self.fetch(QueryBuilder::new("/currencies")?).await
	}

	/// Gets the latest rates. ― [Latest docs](https://www.frankfurter.app/docs/#latest).
	pub async fn latest(&self, params: &Params) -> Result<SingleDate, Error> {
		let query = params.write_query(QueryBuilder::new("/latest")?);
		let rates: SingleDate = self.fetch(query).await?;
		debug!("Fetched {} rates as of {}", rates.rates.len(), rates.date);
		Ok(rates)
	}

	/// Gets the rates on the given date. ― [Historical docs](https://www.frankfurter.app/docs/#historical).
	///
	/// Fails with [`Error::OutOfRange`] for a date before [`min_date`].
	pub async fn historical(&self, date: NaiveDate, params: &Params) -> Result<SingleDate, Error> {
		check_min_date("date", date)?;
		let query = params.write_query(QueryBuilder::new(&date_text(date))?);
		let rates: SingleDate = self.fetch(query).await?;
		debug!("Fetched {} rates as of {}", rates.rates.len(), rates.date);
		Ok(rates)
	}

	/// Gets the rates over a range of dates. ― [Time series docs](https://www.frankfurter.app/docs/#timeseries).
	///
	/// Without `date_to`, the series runs through the latest available date.
	/// Fails with [`Error::OutOfRange`] for a date before [`min_date`], or for `date_to` before
	/// `date_from`.
	pub async fn time_series(
		&self,
		date_from: NaiveDate,
		date_to: Option<NaiveDate>,
		params: &Params,
	) -> Result<TimeSeries, Error> {
		check_min_date("date_from", date_from)?;
		let date_to = match date_to {
			Some(date_to) => {
				check_min_date("date_to", date_to)?;
				if date_to < date_from {
					return Err(Error::OutOfRange {
						argument: "date_to",
						message: format!(
							"date to {} is before date from {}",
							date_text(date_to),
							date_text(date_from)
						),
					});
				}
				date_text(date_to)
			}
			None => String::new(),
		};
		let path = format!("{}..{}", date_text(date_from), date_to);
		let query = params.write_query(QueryBuilder::new(&path)?);
		let series: TimeSeries = self.fetch(query).await?;
		debug!("Fetched {} dates from {}", series.len(), series.start_date);
		Ok(series)
	}

	/// Gets the latest rate of a single currency.
	///
	/// The base currency and amount come from `params`; its target currencies are replaced by
	/// `currency`. Returns [`None`] if the API has no rate for the currency.
	pub async fn latest_rate(&self, currency: &str, params: &Params) -> Result<Option<Decimal>, Error> {
		let currency = currency::normalize(currency)?;
		self.latest(&params.single_currency(&currency)).await?.get_rate(&currency)
	}

	/// Gets the rate of a single currency on the given date.
	///
	/// See [`latest_rate`](Self::latest_rate) for how `params` is used.
	pub async fn rate_for(&self, date: NaiveDate, currency: &str, params: &Params) -> Result<Option<Decimal>, Error> {
		let currency = currency::normalize(currency)?;
		self.historical(date, &params.single_currency(&currency)).await?.get_rate(&currency)
	}

	async fn fetch<T: DeserializeOwned>(&self, query: QueryBuilder) -> Result<T, Error> {
		let url = query.to_string();
		debug!("Querying {url}");
		let body = self.network.query(&url).await?;
		Ok(serde_json::from_slice(&body)?)
	}
}

/// Gets the latest rate of a single currency with a one-shot [`Client`].
///
/// See [`Client::latest_rate`].
///
/// # Examples
/// ```no_run
/// # async fn run() -> Result<(), frankfurter::Error> {
/// let usd = frankfurter::latest_rate("USD", &Default::default()).await?;
/// # Ok(()) }
/// ```
pub async fn latest_rate(currency: &str, params: &Params) -> Result<Option<Decimal>, Error> {
	Client::new().latest_rate(currency, params).await
}

/// Gets the rate of a single currency on the given date with a one-shot [`Client`].
///
/// See [`Client::rate_for`].
pub async fn rate_for(date: NaiveDate, currency: &str, params: &Params) -> Result<Option<Decimal>, Error> {
	Client::new().rate_for(date, currency, params).await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_params() {
		let query = Params::default().write_query(QueryBuilder::new("latest").unwrap());
		assert_eq!(query.to_string(), "/latest");
	}

	#[test]
	fn test_params_order() {
		let params = Params::default()
			.amount(Decimal::TEN)
			.to_currencies(["gbp", "usd"])
			.base_currency("CHF");
		let query = params.write_query(QueryBuilder::new("latest").unwrap());
		assert_eq!(query.to_string(), "/latest?from=CHF&to=GBP%2cUSD&amount=10");
	}

	#[test]
	fn test_base_currency_sent_as_given() {
		let params = Params::default().base_currency("eur");
		let query = params.write_query(QueryBuilder::new("latest").unwrap());
		assert_eq!(query.to_string(), "/latest?from=eur");
	}

	#[test]
	fn test_single_currency_params() {
		let params = Params::default().base_currency("USD").to_currencies(["GBP", "JPY"]).amount(Decimal::TEN);
		let query = params.single_currency("CHF").write_query(QueryBuilder::new("latest").unwrap());
		assert_eq!(query.to_string(), "/latest?from=USD&to=CHF&amount=10");
		let query = Params::default().single_currency("CHF").write_query(QueryBuilder::new("latest").unwrap());
		assert_eq!(query.to_string(), "/latest?to=CHF");
	}

	#[test]
	fn test_min_date() {
		assert_eq!(date_text(min_date()), "1999-01-04");
		assert!(check_min_date("date", min_date()).is_ok());
		let err = check_min_date("date", NaiveDate::from_ymd_opt(1999, 1, 3).unwrap()).unwrap_err();
		assert!(matches!(err, Error::OutOfRange { argument: "date", .. }));
		assert!(err.to_string().contains("1999-01-04"));
	}
}
