/*!
 * Command-line interface for lstable
 */

use std::io;
use std::process;

use clap::{CommandFactory, Parser};

use lstable::config::{Args, Config};
use lstable::lister::Lister;

fn main() {
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "lstable", &mut io::stdout());
        return;
    }

    let config = Config::from_args(args);
    if let Err(e) = config.validate() {
        eprintln!("lstable: {}", e);
        process::exit(2);
    }

    let lister = Lister::from_config(&config);
    let request = config.request();
    log::debug!("listing {:?}", request);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = match lister.run(&request, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("lstable: {}", e);
            process::exit(config.error_code);
        }
    };

    process::exit(config.exit_code(status));
}
