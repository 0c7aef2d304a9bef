use super::utils;

const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";
const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 9_1 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13B143 Safari/601.1";

#[test]
#[ignore]
fn test_parse_args() {
    let lines = utils::UaprobeCli::run(vec!["parse", CHROME_WINDOWS, SAFARI_IPHONE]).unwrap();
    assert_eq!(
        lines,
        "browser=Chrome/58.0.3029 os=Windows/10.0.0 platform=Windows device=Computer bot=false\n\
         browser=Safari/9.0.0 os=iOS/9.1.0 platform=iPhone device=Phone bot=false\n"
    );
}

#[test]
#[ignore]
fn test_parse_stdin() {
    let input = format!("{CHROME_WINDOWS}\n\n{SAFARI_IPHONE}\n");
    let lines = utils::UaprobeCli::run_with_stdin(vec!["parse"], &input).unwrap();
    assert_eq!(lines.lines().count(), 2);
    assert!(lines.contains("browser=Safari/9.0.0"));
}

#[test]
#[ignore]
fn test_parse_json() {
    let lines = utils::UaprobeCli::run(vec!["parse", "--json", CHROME_WINDOWS]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&lines).unwrap();
    assert_eq!(value["header"], CHROME_WINDOWS);
    assert_eq!(value["browser"]["kind"], "Chrome");
    assert_eq!(value["browser"]["version"]["major"], 58);
    assert_eq!(value["os"]["name"], "Windows");
    assert_eq!(value["device"], "Computer");
    assert_eq!(value["bot"], false);
}

#[test]
#[ignore]
fn test_parse_max_length_env() {
    let lines = utils::UaprobeCli::run_with_env(
        vec!["parse", CHROME_WINDOWS],
        &[("UAPROBE_MAX_LENGTH", "11")],
    )
    .unwrap();
    assert_eq!(
        lines,
        "browser=Unknown/0.0.0 os=Unknown/0.0.0 platform=Unknown device=Unknown bot=false\n"
    );
}
