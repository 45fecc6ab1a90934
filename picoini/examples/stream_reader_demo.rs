// Example pulling settings from a chunked in-memory stream

use picoini::{ConfigReader, ParseError, ParserOptions, SliceReader};

fn main() -> Result<(), ParseError> {
    env_logger::init();

    println!("🚀 ConfigReader Demo with SliceReader");
    println!("====================================");

    let ini = b"# Device configuration\n\
        [wifi]\n\
        ssid = home-network\n\
        channel = 6\n\
        \n\
        [network]\n\
        dhcp = false\n\
        ip = 192.168.1.10\n";

    println!("📏 Total size: {} bytes", ini.len());
    println!();

    // Read 4 bytes at a time (simulates a slow serial link)
    let reader = SliceReader::new(ini, 4);
    let options = ParserOptions::default().with_max_line_length(64);

    let mut config = ConfigReader::default();
    config.begin(reader, options)?;

    println!("🔄 Reading settings:");
    let mut count = 0;
    while let Some(mut setting) = config.next_setting()? {
        count += 1;
        if setting.section_changed() {
            println!("  📂 [{}]", setting.section());
        }
        let name = setting.name().unwrap_or_default().to_string();
        match name.as_str() {
            "channel" => println!("  🔢 {name} = {}", setting.int_value()),
            "dhcp" => println!("  ✅ {name} = {}", setting.bool_value()),
            "ip" => println!("  🌐 {name} = {}", setting.ip_address()),
            _ => println!("  📝 {name} = '{}'", setting.value().unwrap_or_default()),
        }
    }
    config.end();

    println!();
    println!("✅ Read {count} settings");
    Ok(())
}
