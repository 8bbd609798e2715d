// CLI modules
mod args;
mod op;
mod ops;
mod state;

use args::Args;
use clap::{Parser, Subcommand};
use op::Op;
use ops::{Cat, Create, Grant, Grants, Ls, Rm, Write};

command_enum! {
    (Grant, Grant),
    (Grants, Grants),
    (Ls, Ls),
    (Cat, Cat),
    (Write, Write),
    (Create, Create),
    (Rm, Rm),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let ctx = match op::OpContext::new(args.state_dir) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: failed to open arbor state: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
