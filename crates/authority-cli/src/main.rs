use clap::Parser;

mod args;
mod cmd;
mod logging;
mod output;

fn main() {
    let cli = args::Cli::parse();
    output::init(cli.json);
    logging::init(cli.verbose);

    if let Err(err) = cmd::dispatch(cli) {
        cmd::report_failure(&err);
        std::process::exit(1);
    }
}
