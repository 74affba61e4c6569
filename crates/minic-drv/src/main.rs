use minic_drv::{parse_args, print_help, print_version, run};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        },
    };

    if config.help {
        print_help();
        return;
    }

    if config.version {
        print_version();
        return;
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
