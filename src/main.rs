#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

use {
    std::{
        env,
        io
    },
    clap::Parser,
    scry::*
};

/// Look up Standard-legal cards on Scryfall, one search per line of stdin.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short = 'u', long, help = "Prints scryfall url")]
    print_url: bool,

    #[clap(short = 'n', long, help = "Disable color output")]
    no_color: bool
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if args.print_url {
        print_url(stdin.lock(), stdout.lock())
    } else {
        let options = RenderOptions {
            colored: !args.no_color && env::var_os("NO_COLOR").is_none()
        };
        let client = Client::new(&search::api_base()?)?;
        run_queries(&client, stdin.lock(), stdout.lock(), options)
    }
}
