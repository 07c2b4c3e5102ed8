//! The [`Network`] collaborator and its HTTP implementation, [`NetworkApi`].

use async_trait::async_trait;
use tracing::trace;

use crate::Error;

/// The default [Frankfurter](https://www.frankfurter.app/) API base URL.
pub const DEFAULT_URL: &str = "https://api.frankfurter.app";

/// Performs the API requests for a [`Client`](crate::Client).
///
/// Implementations are released with the client that owns them.
#[async_trait]
pub trait Network: Send + Sync {
	/// Gets the body of a successful response for the given relative URL, e.g. `/currencies`.
	///
	/// Fails for a connection failure or a non-2xx status.
	async fn query(&self, url: &str) -> Result<Vec<u8>, Error>;
}

#[async_trait]
impl<N: Network + ?Sized> Network for Box<N> {
	async fn query(&self, url: &str) -> Result<Vec<u8>, Error> { (**self).query(url).await }
}

/// [`Network`] over HTTP with [`reqwest`].
#[derive(Debug, Clone)]
pub struct NetworkApi {
	client: reqwest::Client,
	/// The base URL, without trailing slashes.
	base_url: String,
}

impl NetworkApi {
	/// Creates a new [`NetworkApi`] for the [default URL](DEFAULT_URL).
	pub fn new() -> Self { Self::with_base_url(DEFAULT_URL) }

	/// Creates a new [`NetworkApi`] for the given base URL, e.g. a self-hosted instance.
	pub fn with_base_url(base_url: &str) -> Self { Self::with_client(reqwest::Client::new(), base_url) }

	/// Creates a new [`NetworkApi`] using the given HTTP client.
	///
	/// Timeouts, proxies and the like are configured on the client.
	pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
		Self {
			client,
			base_url: base_url.trim_end_matches('/').to_owned(),
		}
	}

	/// The base URL.
	#[inline] pub fn base_url(&self) -> &str { &self.base_url }

	/// Joins a relative URL (with its `/` prefix) to the base URL.
	pub fn full_url(&self, url: &str) -> String { format!("{}{}", self.base_url, url) }
}

impl Default for NetworkApi { #[inline] fn default() -> Self { Self::new() } }

#[async_trait]
impl Network for NetworkApi {
	async fn query(&self, url: &str) -> Result<Vec<u8>, Error> {
		let url = self.full_url(url);
		trace!("Request url: {url}");
		let response = self.client.get(&url).send().await?.error_for_status()?;
		Ok(response.bytes().await?.to_vec())
	}
}
