// Example reading a configuration file with the flag-style API
//
// Usage: cargo run --example file_reader_demo -- path/to/config.ini

use picoini::{ConfigReader, FileReader, ParserOptions};

fn main() {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: file_reader_demo <config.ini>");
        std::process::exit(2);
    };

    let options = ParserOptions::default()
        .with_ignore_case(true)
        .with_tolerate_errors(true);

    let mut config: ConfigReader<FileReader> = ConfigReader::default();
    if let Err(e) = config.open(&path, options) {
        eprintln!("❌ {path}: {e}");
        std::process::exit(1);
    }

    println!("📄 {path}");
    while config.read_next_setting() {
        if config.section_changed() {
            println!("[{}]", config.section());
        }
        if config.section_is("network") && config.name_is("ip") {
            println!("  ip address -> {}", config.ip_address());
        } else if config.name_is("enabled") {
            println!("  enabled -> {}", config.bool_value());
        } else {
            let name = config.name().unwrap_or_default().to_string();
            let value = config.copy_value(true).unwrap_or_default();
            println!("  {name} = {value}");
        }
    }

    println!("🏁 stopped at line {}", config.line_number());
    config.end();
}
