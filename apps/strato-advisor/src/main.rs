use clap::Parser;

fn main() -> color_eyre::Result<()> {
	let args = strato_advisor::Args::parse();
	let output = strato_advisor::run(args)?;

	println!("{output}");

	Ok(())
}
