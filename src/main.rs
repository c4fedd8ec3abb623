use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use stargen::{Config, RandSource};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file
    #[arg(long, short, default_value = stargen::DEFAULT_OUTPUT)]
    output: String,

    /// Number of stars to generate
    #[arg(long, short, default_value_t = stargen::STAR_COUNT)]
    count: usize,

    /// Seed for the random generator, OS-seeded if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let config = Config {
        count: args.count,
        ..Config::default()
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut source = RandSource(StdRng::seed_from_u64(seed));

    stargen::generate_to_file(&config, &mut source, &args.output).unwrap();

    println!("Wrote {} stars to {}", args.count, args.output);
}
