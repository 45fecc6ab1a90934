// Integration tests for the ConfigReader API

use picoini::{ConfigReader, NullSink, ParserOptions, SliceReader};

fn open(input: &[u8]) -> ConfigReader<SliceReader<'_>, NullSink> {
    open_with(input, ParserOptions::default())
}

fn open_with(input: &[u8], options: ParserOptions) -> ConfigReader<SliceReader<'_>, NullSink> {
    let mut config = ConfigReader::new(NullSink);
    config
        .begin(SliceReader::full_slice(input), options)
        .expect("begin");
    config
}

/// Collects (section, section_changed, name, raw value) for every setting
fn collect(
    config: &mut ConfigReader<SliceReader<'_>, NullSink>,
) -> Vec<(String, bool, String, String)> {
    let mut settings = Vec::new();
    while let Some(setting) = config.next_setting().expect("no error") {
        settings.push((
            setting.section().to_string(),
            setting.section_changed(),
            setting.name().expect("name").to_string(),
            setting.raw_value().expect("value").to_string(),
        ));
    }
    settings
}

#[test_log::test]
fn test_section_then_setting() {
    let mut config = open(b"[sec]\nkey=val\n");

    let setting = config.next_setting().unwrap().expect("setting");
    assert!(setting.section_changed());
    assert_eq!(setting.section(), "sec");
    assert_eq!(setting.name(), Some("key"));
    assert_eq!(setting.raw_value(), Some("val"));

    assert!(config.next_setting().unwrap().is_none());
    assert!(config.is_at_end());
}

#[test]
fn test_settings_before_any_section() {
    let mut config = open(b"a=1\n[s]\nb=2\n");
    assert_eq!(
        collect(&mut config),
        [
            ("".into(), false, "a".into(), "1".into()),
            ("s".into(), true, "b".into(), "2".into()),
        ]
    );
}

#[test]
fn test_section_persists_until_next_header() {
    let input = b"[one]\na=1\nb=2\nc=3\n[two]\nd=4\ne=5\n";
    let mut config = open(input);
    assert_eq!(
        collect(&mut config),
        [
            ("one".into(), true, "a".into(), "1".into()),
            ("one".into(), false, "b".into(), "2".into()),
            ("one".into(), false, "c".into(), "3".into()),
            ("two".into(), true, "d".into(), "4".into()),
            ("two".into(), false, "e".into(), "5".into()),
        ]
    );
}

#[test]
fn test_section_change_survives_comments_between_header_and_setting() {
    let mut config = open(b"[net]\n# the address\n\nip=10.0.0.1\n");
    let setting = config.next_setting().unwrap().unwrap();
    assert!(setting.section_changed());
    assert_eq!(setting.section(), "net");
}

#[test]
fn test_consecutive_headers_keep_the_last() {
    let mut config = open(b"[first]\n[second]\nk=v\n");
    let setting = config.next_setting().unwrap().unwrap();
    assert!(setting.section_changed());
    assert_eq!(setting.section(), "second");
}

#[test]
fn test_comments_and_blank_lines_produce_nothing() {
    let mut config = open(b"# comment\n\n   \n\t\n  # indented comment\n");
    assert!(config.next_setting().unwrap().is_none());
    assert_eq!(config.section(), "");
    assert!(!config.section_changed());
}

#[test]
fn test_comment_does_not_change_section() {
    let mut config = open(b"[keep]\na=1\n# [other]\nb=2\n");
    assert_eq!(
        collect(&mut config),
        [
            ("keep".into(), true, "a".into(), "1".into()),
            ("keep".into(), false, "b".into(), "2".into()),
        ]
    );
}

#[test]
fn test_whitespace_around_equal() {
    let mut config = open(b"  key \t =  spaced value  \n");
    let mut setting = config.next_setting().unwrap().unwrap();
    assert_eq!(setting.name(), Some("key"));
    assert_eq!(setting.raw_value(), Some("  spaced value  "));
    assert_eq!(setting.value(), Some("spaced value"));
}

#[test]
fn test_value_keeps_equal_signs_and_hashes() {
    let mut config = open(b"url=http://host/?a=b#frag\n");
    let setting = config.next_setting().unwrap().unwrap();
    assert_eq!(setting.name(), Some("url"));
    assert_eq!(setting.raw_value(), Some("http://host/?a=b#frag"));
}

#[test]
fn test_section_header_whitespace() {
    let mut config = open(b"[  padded]   \t\nk=v\n");
    let setting = config.next_setting().unwrap().unwrap();
    assert_eq!(setting.section(), "padded");
}

#[test]
fn test_lone_bracket_is_ignored() {
    let mut config = open(b"[\n[  \nk=v\n");
    let setting = config.next_setting().unwrap().unwrap();
    assert_eq!(setting.section(), "");
    assert!(!setting.section_changed());
    assert_eq!(setting.name(), Some("k"));
}

#[test]
fn test_crlf_line_endings() {
    let mut unix = open(b"[s]\na=1\nb = 2\n");
    let mut windows = open(b"[s]\r\na=1\r\nb = 2\r\n");
    assert_eq!(collect(&mut unix), collect(&mut windows));
}

#[test]
fn test_last_line_without_newline() {
    let mut config = open(b"a=1\nb=2");
    let names: Vec<_> = collect(&mut config).into_iter().map(|s| s.2).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_empty_input() {
    let mut config = open(b"");
    assert!(config.next_setting().unwrap().is_none());
    assert!(config.next_setting().unwrap().is_none());
}

#[test]
fn test_chunked_reader_matches_full_slice() {
    let input = b"# settings\n[wifi]\nssid = home\npass=secret\r\n[mqtt]\nport=1883\n";
    let mut full = open(input);
    let expected = collect(&mut full);
    assert_eq!(expected.len(), 3);

    for chunk_size in [1, 2, 3, 7, 64] {
        let mut config = ConfigReader::new(NullSink);
        config
            .begin(SliceReader::new(input, chunk_size), ParserOptions::default())
            .unwrap();
        assert_eq!(collect(&mut config), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn test_trim_semantics() {
    let mut config = open(b"k=   \n");
    let mut setting = config.next_setting().unwrap().unwrap();
    // Whitespace-only values trim to empty, not absent
    assert_eq!(setting.value(), Some(""));
    assert_eq!(setting.value(), Some(""));
    assert_eq!(setting.raw_value(), Some(""));
}

#[test]
fn test_copy_value_outlives_session() {
    let mut config = open(b"name =  device-01 \n");
    let (trimmed, raw) = {
        let mut setting = config.next_setting().unwrap().unwrap();
        let raw = setting.copy_value(false).unwrap();
        let trimmed = setting.copy_value(true).unwrap();
        (trimmed, raw)
    };
    config.end();
    drop(config);
    assert_eq!(raw, "  device-01 ");
    assert_eq!(trimmed, "device-01");
}

#[test]
fn test_flag_style_api() {
    let input = b"[net]\nip = 192.168.1.10\nport=8080\ndhcp = true\nname= node \n";
    let mut config = open(input);

    let mut seen = 0;
    while config.read_next_setting() {
        seen += 1;
        assert!(config.section_is("net"));
        if config.name_is("ip") {
            assert!(config.section_changed());
            assert_eq!(
                config.ip_address(),
                std::net::Ipv4Addr::new(192, 168, 1, 10)
            );
        } else if config.name_is("port") {
            assert!(!config.section_changed());
            assert_eq!(config.int_value(), 8080);
        } else if config.name_is("dhcp") {
            assert!(config.bool_value());
        } else if config.name_is("name") {
            assert_eq!(config.raw_value(), Some(" node "));
            assert_eq!(config.value(), Some("node"));
            assert_eq!(config.copy_value(true).as_deref(), Some("node"));
        } else {
            panic!("unexpected setting {:?}", config.name());
        }
    }
    assert_eq!(seen, 4);
    assert!(!config.read_next_setting());
}

#[test]
fn test_accessors_without_setting() {
    let mut config = open(b"[only]\n");
    assert!(!config.read_next_setting());
    assert_eq!(config.section(), "only");
    assert_eq!(config.name(), None);
    assert_eq!(config.raw_value(), None);
    assert_eq!(config.value(), None);
    assert_eq!(config.copy_value(true), None);
    assert_eq!(config.int_value(), 0);
    assert!(!config.bool_value());
    assert_eq!(config.ip_address(), std::net::Ipv4Addr::UNSPECIFIED);
    assert!(!config.name_is(""));
}

#[test]
fn test_end_is_idempotent() {
    let mut config = open(b"a=1\n");
    assert!(config.is_open());
    config.end();
    config.end();
    assert!(!config.is_open());
    assert!(config.is_at_end());
    assert!(!config.read_next_setting());
    assert_eq!(config.section(), "");
}

#[test]
fn test_begin_after_end_starts_fresh() {
    let mut config = open(b"[old]\na=1\nb=2\n");
    assert!(config.read_next_setting());
    assert_eq!(config.section(), "old");
    assert_eq!(config.line_number(), 3);
    config.end();

    config
        .begin(SliceReader::full_slice(b"c=3\n"), ParserOptions::default())
        .unwrap();
    assert_eq!(config.line_number(), 1);
    assert_eq!(config.section(), "");
    assert!(config.read_next_setting());
    assert_eq!(config.section(), "");
    assert!(!config.section_changed());
    assert_eq!(config.name(), Some("c"));
}

#[test]
fn test_begin_replaces_open_session() {
    let mut config = open(b"[old]\na=1\n");
    assert!(config.read_next_setting());
    config
        .begin(SliceReader::full_slice(b"b=2\n"), ParserOptions::default())
        .unwrap();
    assert!(config.read_next_setting());
    assert_eq!(config.section(), "");
    assert_eq!(config.name(), Some("b"));
}

#[test]
fn test_ignore_case_comparisons() {
    let options = ParserOptions::default().with_ignore_case(true);
    let mut config = open_with(b"[Network]\nDHCP=TRUE\n", options);
    let mut setting = config.next_setting().unwrap().unwrap();
    assert!(setting.section_is("network"));
    assert!(setting.name_is("dhcp"));
    assert!(setting.bool_value());
}

#[test]
fn test_case_sensitive_comparisons() {
    let mut config = open(b"[Network]\nDHCP=True\n");
    let mut setting = config.next_setting().unwrap().unwrap();
    assert!(!setting.section_is("network"));
    assert!(setting.section_is("Network"));
    assert!(!setting.name_is("dhcp"));
    assert!(!setting.bool_value());
}
