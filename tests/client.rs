use std::sync::Mutex;

use async_trait::async_trait;
use frankfurter::{Client, Decimal, Error, NaiveDate, Network, Params};

const CURRENCIES: &str = include_str!("fixtures/currencies.json");
const LATEST: &str = include_str!("fixtures/latest.json");
const HISTORICAL: &str = include_str!("fixtures/historical.json");
const TIME_SERIES: &str = include_str!("fixtures/time_series.json");

/// Serves the fixtures by URL prefix and records every requested URL.
#[derive(Default)]
struct Fixtures {
	requests: Mutex<Vec<String>>,
}

impl Fixtures {
	fn requests(&self) -> Vec<String> { self.requests.lock().unwrap().clone() }
}

#[async_trait]
impl Network for Fixtures {
	async fn query(&self, url: &str) -> Result<Vec<u8>, Error> {
		self.requests.lock().unwrap().push(url.to_owned());
		let body = if url.starts_with("/currencies") {
			CURRENCIES
		} else if url.starts_with("/latest") {
			LATEST
		} else if url.starts_with("/2021-08-02..") {
			TIME_SERIES
		} else if url.starts_with("/1999") {
			HISTORICAL
		} else {
			return Err(Error::Transport(format!("no fixture for {url}")));
		};
		Ok(body.as_bytes().to_vec())
	}
}

/// Answers every request with the same body.
struct Body(&'static str);

#[async_trait]
impl Network for Body {
	async fn query(&self, _: &str) -> Result<Vec<u8>, Error> { Ok(self.0.as_bytes().to_vec()) }
}

fn client() -> Client<Fixtures> { Client::with_network(Fixtures::default()) }

fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

#[tokio::test]
async fn test_currencies() {
	let client = client();
	let currencies = client.currencies().await.unwrap();
	assert_eq!(currencies.len(), 33);
	assert!(currencies.contains_key("AUD"));
	assert!(currencies.contains_key("ZAR"));
	assert!(!currencies.contains_key("XXX"));
	assert_eq!(currencies["EUR"], "Euro");
	assert_eq!(client.network().requests(), ["/currencies"]);
}

#[tokio::test]
async fn test_latest() {
	let client = client();
	let latest = client.latest(&Params::default()).await.unwrap();
	assert_eq!(latest.amount, Decimal::ONE);
	assert_eq!(latest.base, "EUR");
	assert_eq!(latest.date, date(2021, 8, 27));
	assert_eq!(latest.rates.len(), 32);
	assert!(latest.rates.contains_key("AUD"));
	assert!(latest.rates.contains_key("ZAR"));
	assert!(!latest.rates.contains_key("XXX"));
	assert_eq!(latest.rates["AUD"], Decimal::new(1622, 3));
	assert_eq!(latest.get_rate("xxx").unwrap(), None);
	assert_eq!(client.network().requests(), ["/latest"]);
}

#[tokio::test]
async fn test_latest_query() {
	let client = client();
	let params = Params::default()
		.base_currency("USD")
		.to_currencies([" gbp", "jpy"])
		.amount(Decimal::TWO);
	client.latest(&params).await.unwrap();
	assert_eq!(client.network().requests(), ["/latest?from=USD&to=GBP%2cJPY&amount=2"]);
}

#[tokio::test]
async fn test_historical() {
	let client = client();
	let historical = client.historical(date(1999, 1, 4), &Params::default()).await.unwrap();
	assert_eq!(historical.amount, Decimal::ONE);
	assert_eq!(historical.base, "EUR");
	assert_eq!(historical.date, date(1999, 1, 4));
	assert_eq!(historical.rates.len(), 27);
	assert_eq!(historical.get_rate("AUD").unwrap(), Some(Decimal::new(191, 2)));
	assert_eq!(client.network().requests(), ["/1999-01-04"]);
}

#[tokio::test]
async fn test_historical_before_min_date() {
	let client = client();
	let err = client.historical(date(1999, 1, 3), &Params::default()).await.unwrap_err();
	assert!(matches!(err, Error::OutOfRange { argument: "date", .. }));
	assert!(err.to_string().contains("1999-01-04"));
	assert!(client.network().requests().is_empty());
}

#[tokio::test]
async fn test_time_series_from_only() {
	let client = client();
	let series = client.time_series(date(2021, 8, 2), None, &Params::default()).await.unwrap();
	assert_eq!(series.amount, Decimal::ONE);
	assert_eq!(series.base, "EUR");
	assert_eq!(series.start_date, date(2021, 8, 2));
	assert_eq!(series.len(), 20);
	let first = series.get(date(2021, 8, 2)).unwrap();
	assert_eq!(first["GBP"], Decimal::new(85568, 5));
	assert_eq!(client.network().requests(), ["/2021-08-02.."]);
}

#[tokio::test]
async fn test_time_series_from_to() {
	let client = client();
	let params = Params::default().to_currencies(["usd"]);
	let series = client
		.time_series(date(2021, 8, 2), Some(date(2021, 8, 27)), &params)
		.await
		.unwrap();
	assert_eq!(series.start_date, date(2021, 8, 2));
	assert_eq!(series.end_date, Some(date(2021, 8, 27)));
	assert_eq!(series.len(), 20);
	assert_eq!(series.get_rate(date(2021, 8, 2), "gbp").unwrap(), Some(Decimal::new(85568, 5)));
	// weekends are not filled in
	assert!(series.get(date(2021, 8, 7)).is_none());
	assert_eq!(series.series("USD").unwrap().count(), 20);
	assert_eq!(client.network().requests(), ["/2021-08-02..2021-08-27?to=USD"]);
}

#[tokio::test]
async fn test_time_series_out_of_range() {
	let client = client();
	let params = Params::default();

	let err = client.time_series(date(1998, 12, 31), None, &params).await.unwrap_err();
	assert!(matches!(err, Error::OutOfRange { argument: "date_from", .. }));

	let err = client.time_series(date(1999, 1, 4), Some(date(1999, 1, 1)), &params).await.unwrap_err();
	assert!(matches!(err, Error::OutOfRange { argument: "date_to", .. }));
	assert!(err.to_string().contains("1999-01-04"));

	let err = client.time_series(date(2021, 8, 2), Some(date(2021, 8, 1)), &params).await.unwrap_err();
	assert!(matches!(err, Error::OutOfRange { argument: "date_to", .. }));
	assert!(err.to_string().contains("2021-08-01"));

	assert!(client.network().requests().is_empty());
}

#[tokio::test]
async fn test_time_series_single_day() {
	let client = client();
	let series = client
		.time_series(date(2021, 8, 2), Some(date(2021, 8, 2)), &Params::default())
		.await
		.unwrap();
	assert_eq!(series.start_date, date(2021, 8, 2));
	assert_eq!(client.network().requests(), ["/2021-08-02..2021-08-02"]);
}

#[tokio::test]
async fn test_latest_rate() {
	let client = client();
	let rate = client.latest_rate(" aud", &Params::default()).await.unwrap();
	assert_eq!(rate, Some(Decimal::new(1622, 3)));
	let rate = client.latest_rate("XXX", &Params::default()).await.unwrap();
	assert_eq!(rate, None);
	assert_eq!(client.network().requests(), ["/latest?to=AUD", "/latest?to=XXX"]);
}

#[tokio::test]
async fn test_rate_for() {
	let client = client();
	let rate = client.rate_for(date(1999, 1, 4), "usd", &Params::default().amount(Decimal::TEN)).await.unwrap();
	assert_eq!(rate, Some(Decimal::new(11789, 4)));
	assert_eq!(client.network().requests(), ["/1999-01-04?to=USD&amount=10"]);
}

#[tokio::test]
async fn test_latest_rate_replaces_targets() {
	let client = client();
	let params = Params::default().base_currency("USD").to_currencies(["JPY", "CHF"]);
	let rate = client.latest_rate("gbp", &params).await.unwrap();
	assert_eq!(rate, Some(Decimal::new(85773, 5)));
	assert_eq!(client.network().requests(), ["/latest?from=USD&to=GBP"]);
}

#[tokio::test]
async fn test_blank_currency() {
	let client = client();
	let err = client.latest_rate("  ", &Params::default()).await.unwrap_err();
	assert!(matches!(err, Error::InvalidArgument("currency")));
	let err = client.rate_for(date(1999, 1, 4), "", &Params::default()).await.unwrap_err();
	assert!(matches!(err, Error::InvalidArgument("currency")));
	assert!(client.network().requests().is_empty());
}

#[tokio::test]
async fn test_transport_error() {
	let client = client();
	let err = client.historical(date(2020, 1, 2), &Params::default()).await.unwrap_err();
	assert!(matches!(err, Error::Transport(_)));
	assert_eq!(client.network().requests(), ["/2020-01-02"]);
}

#[tokio::test]
async fn test_response_parse_error() {
	let client = Client::with_network(Body(r#"{"amount":1.0,"base":"EUR"}"#));
	let err = client.latest(&Params::default()).await.unwrap_err();
	assert!(matches!(err, Error::ResponseParseError(_)));

	let client = Client::with_network(Body("<html>not found</html>"));
	let err = client.currencies().await.unwrap_err();
	assert!(matches!(err, Error::ResponseParseError(_)));
}

#[tokio::test]
async fn test_boxed_network() {
	let network: Box<dyn Network> = Box::new(Body(LATEST));
	let client = Client::with_network(network);
	let latest = client.latest(&Params::default()).await.unwrap();
	assert_eq!(latest.rates.len(), 32);
}
