#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "unmarshal", about = "Marshalled code-object inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print compiled-file header fields.
	Info(cmd::info::Args),
	/// Decode and print the full value tree.
	Dump(cmd::dump::Args),
	/// List every code object in the stream.
	Units(cmd::units::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> unmarshal::marshal::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Units(args) => cmd::units::run(args),
	}
}
