use clap::{Parser, Subcommand};
use frankfurter::{network::DEFAULT_URL, Client, Decimal, NaiveDate, NetworkApi, Params, EUR};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// API base URL.
	#[clap(long, default_value = DEFAULT_URL)]
	url: String,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Currencies,
	Rates {
		#[clap(long)]
		date: Option<NaiveDate>,
		#[clap(long, default_value = EUR)]
		base: String,
		currencies: Vec<String>,
	},
	Series {
		from: NaiveDate,
		to: Option<NaiveDate>,
		#[clap(long)]
		currency: String,
	},
	Convert {
		from: String,
		to: String,
		amount: Decimal,
	},
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let cli = Cli::parse();
	let client = Client::with_network(NetworkApi::with_base_url(&cli.url));

	match cli.command {
		CliCommand::Currencies => {
			for (code, name) in client.currencies().await.unwrap() { println!("{code} {name}"); }
		}
		CliCommand::Rates { date, base, currencies } => {
			let params = Params::default().base_currency(base).to_currencies(currencies);
			let rates = match date {
				Some(date) => client.historical(date, &params).await,
				None => client.latest(&params).await,
			}
			.unwrap();
			println!("Fetched {} rates as of {}", rates.rates.len(), rates.date);
			for (currency, rate) in rates.iter() { println!("{currency} {rate}"); }
		}
		CliCommand::Series { from, to, currency } => {
			let params = Params::default().to_currencies([currency.as_str()]);
			let series = client.time_series(from, to, &params).await.unwrap();
			for (date, rate) in series.series(&currency).unwrap() { println!("{date} {rate}"); }
		}
		CliCommand::Convert { from, to, amount } => {
			let rates = client.latest(&Params::default().to_currencies([&from, &to])).await.unwrap();
			match rates.convert(amount, &from, &to).unwrap() {
				Some(converted) => println!("{amount} {from} = {converted} {to}"),
				None => println!("no rate for {from} or {to}"),
			}
		}
	}
}
