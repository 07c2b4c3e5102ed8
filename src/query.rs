//! URL building

use std::{borrow::Cow, fmt::{self, Display, Formatter}};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{currency, Error};

/// A value that can be written as a query parameter.
///
/// [`None`] (or an empty string) means there is nothing to write.
pub trait QueryValue {
	/// The unencoded text of the value.
	fn query_value(&self) -> Option<Cow<'_, str>>;
}

impl QueryValue for str {
	#[inline] fn query_value(&self) -> Option<Cow<'_, str>> {
		if self.is_empty() { None } else { Some(Cow::Borrowed(self)) }
	}
}

impl QueryValue for String {
	#[inline] fn query_value(&self) -> Option<Cow<'_, str>> { self.as_str().query_value() }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
	#[inline] fn query_value(&self) -> Option<Cow<'_, str>> { (**self).query_value() }
}

impl<T: QueryValue> QueryValue for Option<T> {
	#[inline] fn query_value(&self) -> Option<Cow<'_, str>> { self.as_ref().and_then(T::query_value) }
}

/// Written without trailing zeros, e.g. `2` rather than `2.00`.
impl QueryValue for Decimal {
	fn query_value(&self) -> Option<Cow<'_, str>> { Some(Cow::Owned(self.normalize().to_string())) }
}

/// Formats a date the way the API expects it in paths and parameters: `yyyy-MM-dd`.
pub fn date_text(date: NaiveDate) -> String { date.format("%Y-%m-%d").to_string() }

/// Written as [`date_text`].
impl QueryValue for NaiveDate {
	fn query_value(&self) -> Option<Cow<'_, str>> { Some(Cow::Owned(date_text(*self))) }
}

/// Builds a relative URL: a path and an encoded query string.
///
/// Parameters are written in the order they are added. A parameter with an empty name or an
/// empty value is skipped, and so is a parameter equal to the default passed to
/// [`add_unless`](Self::add_unless).
///
/// # Examples
/// ```
/// # use frankfurter::QueryBuilder;
/// # use rust_decimal::Decimal;
/// let url = QueryBuilder::new("latest")?
/// 	.add_unless("from", "EUR", "EUR")
/// 	.add_range("to", ["usd", "gbp"])
/// 	.add_unless("amount", Decimal::TEN, Decimal::ONE);
/// assert_eq!(url.to_string(), "/latest?to=USD%2cGBP&amount=10");
/// # Ok::<(), frankfurter::Error>(())
/// ```
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
	/// The path, with exactly one leading `/`.
	path: String,
	/// Encoded `name=value` pairs.
	query: Vec<String>,
}

impl QueryBuilder {
	/// Creates a new [`QueryBuilder`] for the given path.
	///
	/// Leading slashes are collapsed into one; a missing one is added.
	/// Fails with [`Error::InvalidArgument`] if the path is empty.
	pub fn new(path: &str) -> Result<Self, Error> {
		let path = path.trim();
		if path.is_empty() {
			return Err(Error::InvalidArgument("path"));
		}
		Ok(Self {
			path: format!("/{}", path.trim_start_matches('/')),
			query: Vec::new(),
		})
	}

	/// Adds a parameter, unless the name or the value is empty.
	pub fn add(mut self, name: &str, value: impl QueryValue) -> Self {
		if name.is_empty() { return self; }
		if let Some(value) = value.query_value().filter(|value| !value.is_empty()) {
			self.query.push(format!("{}={}", encode(name), encode(&value)));
		}
		self
	}

	/// Adds a parameter, unless it equals `default` (or the name or the value is empty).
	pub fn add_unless<V: QueryValue + PartialEq>(self, name: &str, value: V, default: V) -> Self {
		if value == default { self } else { self.add(name, value) }
	}

	/// Adds a parameter whose value is the comma-separated list of `values`, each trimmed and
	/// uppercased, unless there are no values.
	pub fn add_range<I, S>(self, name: &str, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.add_range_unless(name, values, "")
	}

	/// Like [`add_range`](Self::add_range), but also skips a list equal to `default`.
	pub fn add_range_unless<I, S>(self, name: &str, values: I, default: &str) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let csv = currency::join(values);
		self.add_unless(name, csv.as_str(), default)
	}

	/// The normalized path.
	#[inline] pub fn path(&self) -> &str { &self.path }

	/// Whether no parameter was added.
	#[inline] pub fn is_empty(&self) -> bool { self.query.is_empty() }
}

impl Display for QueryBuilder {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.path)?;
		for (i, pair) in self.query.iter().enumerate() {
			f.write_str(if i == 0 { "?" } else { "&" })?;
			f.write_str(pair)?;
		}
		Ok(())
	}
}

/// Percent-encodes a query component, with lowercase hex digits.
fn encode(s: &str) -> String {
	let encoded = urlencoding::encode(s);
	let mut out = String::with_capacity(encoded.len());
	let mut hex_digits = 0;
	for c in encoded.chars() {
		if hex_digits > 0 {
			out.push(c.to_ascii_lowercase());
			hex_digits -= 1;
		} else {
			if c == '%' { hex_digits = 2; }
			out.push(c);
		}
	}
	out
}
