//! Parse filenames from the command line and print their components.

use datakey::FileKey;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: parse_key <filename>...");
        std::process::exit(2);
    }

    let mut failures = 0;
    for arg in &args {
        match arg.parse::<FileKey>() {
            Ok(key) => {
                println!("{}", key);
                println!("  setup:     {}", key.setup());
                println!("  period:    {} (#{})", key.period(), key.period().get());
                println!("  run:       {} (#{})", key.run(), key.run().get());
                println!("  category:  {}", key.category());
                println!(
                    "  timestamp: {} (epoch {})",
                    key.timestamp(),
                    key.timestamp().epoch_seconds()
                );
            }
            Err(err) => {
                eprintln!("unrecognized file name: {}", err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
