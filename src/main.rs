//! wfilter - wordlist composition filter for penetration testing
//!
//! Main entry point for the command-line application.

use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use wfilter::cli::Args;
use wfilter::error::WfilterError;
use wfilter::processor::{Processor, ProcessorConfig};
use wfilter::progress::{print_banner, print_error, print_info, print_success};

fn main() {
    // Parse command-line arguments; help and version displays exit 0, any
    // usage error exits 1 (clap's own default of 2 is reserved here for
    // output-open failures).
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(&args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        let code = e
            .downcast_ref::<WfilterError>()
            .map(WfilterError::exit_code)
            .unwrap_or(1);
        process::exit(code);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let config = ProcessorConfig::from_args(args);
    log::debug!("configuration: {:?}", config);

    let processor = Processor::new(config);
    let stats = processor.process(&args.input)?;

    if !args.quiet {
        stats.print_summary();

        match &args.output {
            Some(path) => print_success(&format!(
                "Wordlist filtered successfully! Output written to: {}",
                path.display()
            )),
            None => print_info("Wordlist filtered successfully"),
        }
    }

    Ok(())
}
