use server::server::start;
use std::{env, path::Path};
fn main() {
    println!("Starting basic server on all interfaces");
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 {
        let path = &args[1];
        if Path::new(path).is_file() {
            start(path);
        } else {
            println!("Not a service config file")
        }
    } else {
        println!("Require JSON config input file. See tests for an example")
    }
}
