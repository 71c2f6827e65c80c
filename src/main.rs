use clap::Parser;
use incunabulum::{mach::Runtime, term};

/// A tiny array language read right to left. Starts an interactive
/// session when no expressions or file are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run each line of a script file in one session.
    #[arg(short, long)]
    file: Option<String>,

    /// Do not style error messages.
    #[arg(short, long)]
    plain: bool,

    /// Lines to evaluate in order, sharing variables.
    expressions: Vec<String>,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let args = Args::parse();

    let lines = match &args.file {
        Some(filename) => match term::load(filename) {
            Ok(lines) => lines,
            Err(error) => {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        },
        None if args.expressions.is_empty() => return term::main(args.plain),
        None => args.expressions,
    };

    let mut runtime = Runtime::new();
    for line in lines.iter() {
        print!("{}", term::respond(&mut runtime, line, args.plain));
    }
}
