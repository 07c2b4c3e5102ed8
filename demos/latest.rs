use frankfurter::{Client, Params};

#[tokio::main]
async fn main() {
	let to_currencies: Vec<String> = std::env::args().skip(1).collect();
	let client = Client::new();
	let latest = client
		.latest(&Params::default().to_currencies(to_currencies))
		.await
		.unwrap();
	println!("{} {} as of {}", latest.amount, latest.base, latest.date);
	for (currency, rate) in latest.iter() {
		println!("{currency}, {rate}");
	}
}
