use coinrate::coingecko::{CoinGecko, DEFAULT_API_URL};
use coinrate::Shell;
use coinrate_api::assets::ASSETS;
use log::error;
use prettytable::{row, Table};
use std::io::{stdin, stdout, Write};
use std::process::exit;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "coinrate", about = "look up the current price of a cryptocurrency")]
struct Options {
    #[structopt(subcommand)]
    command: Option<Commands>,
    #[structopt(
        short = "u",
        long = "api-url",
        help = "base URL of the CoinGecko API (env: COINRATE_API_URL)"
    )]
    api_url: Option<String>,
}

#[derive(StructOpt)]
enum Commands {
    #[structopt(name = "list", about = "list the cryptocurrencies that can be looked up")]
    List,
    #[structopt(name = "price", about = "fetch the current USD price of a cryptocurrency")]
    Price {
        name: String,
        #[structopt(
            short = "j",
            long = "json",
            help = "print the answer as JSON, distinguishing HTTP from response errors"
        )]
        json: bool,
    },
}

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let options = Options::from_args();

    let api_url = std::env::var("COINRATE_API_URL")
        .ok()
        .or(options.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let source = CoinGecko::new(&api_url).unwrap_or_else(|e| {
        error!("{}", e);
        eprintln!("Error: could not set up the price API client.");
        exit(1);
    });
    let shell = Shell::new(source);

    match options.command {
        Some(Commands::List) => {
            let mut table = Table::new();
            table.set_titles(row!["#", "Cryptocurrency", "API id"]);
            for (idx, asset) in ASSETS.iter().enumerate() {
                table.add_row(row![r -> idx + 1, asset.name, asset.id]);
            }
            table.set_format(*prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
            table.printstd();
        }
        Some(Commands::Price { name, json }) => {
            let outcome = shell.check_price(Some(name.as_str()));

            if json {
                let mut stdout = stdout();
                serde_json::to_writer(&mut stdout, &outcome.to_answer())
                    .expect("Error: could not write answer.");
                writeln!(stdout).expect("Error: could not write answer.");
            } else if outcome.exit_code() == 0 {
                println!("{}", outcome);
            } else {
                eprintln!("{}", outcome);
            }

            exit(outcome.exit_code());
        }
        None => {
            let stdin = stdin();
            shell
                .run_prompt(stdin.lock(), stdout())
                .expect("Error: terminal input/output failed.");
        }
    }
}
