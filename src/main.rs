use std::env;
use std::process;

use mazegen::{Config, Generator, Mode, Snapshot};

struct Args {
    config: Config,
    mode: Mode,
    animate: bool,
}

fn parse_args(argv: &[String]) -> Option<Args> {
    let mut config = Config::default();
    let mut mode = Mode::Backtracker;
    let mut animate = false;

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--rows" => config.rows = iter.next()?.parse().ok()?,
            "--cols" => config.cols = iter.next()?.parse().ok()?,
            "--seed" => config.seed = Some(iter.next()?.parse().ok()?),
            "--mode" => mode = Mode::from_name(iter.next()?)?,
            "--animate" => animate = true,
            _ => return None,
        }
    }
    config.record_snapshots = animate;

    Some(Args {
        config,
        mode,
        animate,
    })
}

fn show_usage() {
    println!("Usage: mazegen [--rows n] [--cols n] [--seed n] [--mode name] [--animate]");
    print!("Modes:");
    for &mode in Mode::ALL.iter() {
        print!(" {}", mode.name());
    }
    println!();
    println!("--animate prints every generation step instead of just the finished maze.");
}

/// Draw one frame as ASCII walls. The active cell is marked `*`,
/// border/frontier cells `.`. All presentation stays on the binary side;
/// the library only hands out read-only snapshots.
fn render(frame: &Snapshot) -> String {
    let mut out = String::new();

    for row in 0..frame.rows() {
        for col in 0..frame.columns() {
            out.push('+');
            out.push_str(if frame.cell(row, col).up { "   " } else { "---" });
        }
        out.push_str("+\n");

        for col in 0..frame.columns() {
            let cell = frame.cell(row, col);
            out.push(if cell.left { ' ' } else { '|' });
            if frame.active() == Some((row, col)) {
                out.push_str(" * ");
            } else if frame.is_frontier((row, col)) {
                out.push_str(" . ");
            } else {
                out.push_str("   ");
            }
        }
        let edge = frame.cell(row, frame.columns() - 1);
        out.push(if edge.right { ' ' } else { '|' });
        out.push('\n');
    }

    for col in 0..frame.columns() {
        out.push('+');
        let cell = frame.cell(frame.rows() - 1, col);
        out.push_str(if cell.down { "   " } else { "---" });
    }
    out.push('+');

    out
}

fn main() {
    env_logger::init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Some(args) => args,
        None => {
            println!("Your command-line arguments were invalid. Try again.");
            show_usage();
            process::exit(1);
        }
    };

    let mut generator = match Generator::new(args.config) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Err(err) = generator.run(args.mode) {
        eprintln!("generation failed: {}", err);
        process::exit(1);
    }

    if args.animate {
        for frame in generator.snapshots() {
            println!("{}\n", render(frame));
        }
    } else if let Some(frame) = generator.snapshots().last() {
        println!("{}", render(frame));
    }

    println!("Maze generated in {} iterations.", generator.iteration_count());
}
