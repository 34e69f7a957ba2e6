use clap::Parser;

mod perflog;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "nccl-perf-table")]
#[command(about = "Extract nccl-tests results into a CSV table", long_about = None)]
struct Cli {
    /// nccl-tests log (e.g. all_reduce_perf output).
    log: String,

    /// Output table path; overwritten if it exists.
    #[arg(short = 'o', long, default_value = "out.csv")]
    out: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 1) Parse log. The input file is closed once this returns.
    let table = perflog::parse_log_file(&cli.log)?;

    // 2) Nothing matched: report and leave any existing output untouched.
    if table.is_empty() {
        println!("No data parsed. Check your log format.");
        std::process::exit(1);
    }

    // 3) Write CSV.
    render::write_csv(&table, &cli.out)?;
    log::info!("{} rows from {}", table.len(), cli.log);
    println!("Wrote {} rows -> {}", table.len(), cli.out);

    Ok(())
}
