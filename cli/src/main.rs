use clap::Parser;
use hermes_core::artifacts::os::windows::shortcuts::parser::decode_lnk_file;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to the JSON service config
    #[clap(short, long, value_parser, default_value = "hermes.json")]
    config: String,

    /// Decode a single shortcut file and print it as JSON instead of serving
    #[clap(short, long, value_parser)]
    lnk: Option<String>,
}

fn main() {
    let args = Args::parse();
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());

    if let Some(lnk) = args.lnk {
        let decode_result = decode_lnk_file(&lnk);
        match decode_result {
            Ok(shortcut) => match serde_json::to_string_pretty(&shortcut) {
                Ok(output) => println!("{output}"),
                Err(err) => println!("[hermes] Could not serialize the shortcut: {err:?}"),
            },
            Err(err) => println!("[hermes] Failed to decode {lnk}: {err:?}"),
        }
        return;
    }

    println!("[hermes] Starting the service summoner on port 8888");
    server::server::start(&args.config);
}
