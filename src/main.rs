use hhserver_options::args::PROGRAM_NAME;
use hhserver_options::error::EXIT_FAILURE;
use hhserver_options::logging::init_tracing;
use hhserver_options::{parse_options, OptionsError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        let code = match err.downcast_ref::<OptionsError>() {
            Some(OptionsError::Help { usage }) => {
                print!("{}", usage);
                0
            }
            Some(options_err) => {
                eprintln!("Error: {}", options_err);
                options_err.exit_code()
            }
            None => {
                eprintln!("Error: {:#}", err);
                EXIT_FAILURE
            }
        };
        std::process::exit(code);
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let options = parse_options(args)?;

    if options.version() {
        println!("{} {}", PROGRAM_NAME, env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing::info!(
        root = %options.root().display(),
        check_mode = options.check_mode(),
        json_mode = options.json_mode(),
        detach = options.should_detach(),
        startup = ?options.startup(),
        minor_heap_size = options.gc().minor_heap_size,
        space_overhead = options.gc().space_overhead,
        worker_space_overhead = options.worker_gc().space_overhead,
        assume_php = options.assume_php(),
        "server options resolved"
    );
    Ok(())
}
