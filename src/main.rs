use clap::{ArgAction, Parser};
use fourfn::calculate;
use log::LevelFilter;

/// fourfn adds, subtracts, multiplies or divides two numbers.
///
/// Operands such as `-inf` or `-nan` look like flags; pass them after `--`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Left operand.
    #[arg(allow_negative_numbers = true)]
    left: f64,

    /// Operator, either as a symbol (+ - * /) or a name (add, subtract,
    /// multiply, divide).
    operator: String,

    /// Right operand.
    #[arg(allow_negative_numbers = true)]
    right: f64,

    /// Increases log verbosity. Can be repeated. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    match calculate(args.left, &args.operator, args.right) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
