//! [Currency codes](https://en.wikipedia.org/wiki/ISO_4217).
//!
//! Codes are plain strings. The API answers with uppercase codes, and user-supplied codes are
//! brought to that form before they are used as a lookup key or a filter value.

use crate::Error;

/// Euro, the API's default base currency.
pub const EUR: &str = "EUR";

/// Trims and uppercases a code.
#[inline] fn canonical(code: &str) -> String { code.trim().to_uppercase() }

/// Normalizes a user-supplied currency code for lookup.
///
/// Fails with [`Error::InvalidArgument`] if the code is empty or whitespace-only.
///
/// # Examples
/// ```
/// # use frankfurter::currency::normalize;
/// assert_eq!(normalize(" gbp ").unwrap(), "GBP");
/// assert!(normalize("  ").is_err());
/// ```
pub fn normalize(code: &str) -> Result<String, Error> {
	if code.trim().is_empty() {
		return Err(Error::InvalidArgument("currency"));
	}
	Ok(canonical(code))
}

/// Joins codes into the comma-separated list the API takes as a currency filter.
///
/// Each code is trimmed and uppercased; order is preserved.
pub fn join<I, S>(codes: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut csv = String::new();
	for (i, code) in codes.into_iter().enumerate() {
		if i > 0 { csv.push(','); }
		csv.push_str(&canonical(code.as_ref()));
	}
	csv
}
