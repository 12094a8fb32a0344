use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(
    name = "examflw",
    about = "Student exam record validator and reporter",
    version,
    long_about = "Validates student exam records against the business rules and reports one line per exam.\n\nExamples:\n  examflw run                       # Process 10 dummy students\n  examflw run --students 50         # Process a larger cohort\n  examflw run --seed 42             # Reproducible run\n  examflw run --json                # One JSON object per exam\n  examflw --verbose run             # Show pipeline notifications"
)]
struct Examflw {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive execution details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate dummy exams and run them through the validation pipeline
    Run {
        /// Number of dummy students to generate
        #[arg(short, long, default_value_t = 10)]
        students: u32,

        /// Seed for the dummy-data generator; omitted means a fresh
        /// random run
        #[arg(long)]
        seed: Option<u64>,

        /// Emit one JSON object per exam instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Examflw::parse();

    // Log level from the command line flags, default Warning.
    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    // Default to a plain run when no subcommand is given.
    let (students, seed, json) = match cli.command {
        Some(Commands::Run {
            students,
            seed,
            json,
        }) => (students, seed, json),
        None => (10, None, false),
    };

    run(students, seed, json);
}

fn run(students: u32, seed: Option<u64>, json: bool) {
    let mut rng = match seed {
        Some(seed) => {
            logging::debug(&format!("seeding generator with {}", seed));
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    logging::info(&format!("processing exams for {} students", students));

    let notifier = pipeline::LogNotifier;
    let results = examflw_lib::process_cohort(students, &mut rng, &notifier);

    for result in &results {
        if json {
            println!("{}", reporter::report_json(result));
        } else {
            reporter::print_result(result);
        }
    }

    // Failed validations are data, not process errors; the summary is
    // the only place they show up in aggregate.
    if !json {
        reporter::print_summary(&results);
    }
}
