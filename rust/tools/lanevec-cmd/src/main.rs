use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lanevec-cmd")]
#[command(about = "Benchmarks and demonstrations for lane-aligned vectors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time range sums over an f32 lane vector filled with 1, 2, 3, ...
    Bench {
        /// Number of elements in the vector
        #[arg(long, default_value_t = 729_000)]
        count: usize,

        /// First element of the summed range
        #[arg(long, default_value_t = 111)]
        begin: usize,

        /// End of the summed range (exclusive)
        #[arg(long, default_value_t = 700_666)]
        end: usize,

        /// Allocation strategy (defaults to the platform's)
        #[arg(long, value_enum)]
        strategy: Option<commands::bench::Strategy>,
    },

    /// Walk through a u8 vector with u32 lanes, element by element and lane by lane
    Walk,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            count,
            begin,
            end,
            strategy,
        } => commands::bench::run(count, begin, end, strategy),
        Commands::Walk => commands::walk::run(),
    }
}
