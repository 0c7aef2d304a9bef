use super::utils;

#[test]
#[ignore]
fn test_help() {
    let lines = utils::UaprobeCli::run(vec!["help"]).unwrap();
    assert!(lines.contains("uaprobe cli to classify User-Agent strings"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Commands:"));
    assert!(lines.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_parse() {
    let lines = utils::UaprobeCli::run(vec!["help", "parse"]).unwrap();
    assert!(lines.contains("classify User-Agents"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Arguments:"));
    assert!(lines.contains("--json"));
    assert!(lines.contains("UAPROBE_MAX_LENGTH"));
}

#[test]
#[ignore]
fn test_help_bot() {
    let lines = utils::UaprobeCli::run(vec!["help", "bot"]).unwrap();
    assert!(lines.contains("detect whether User-Agents belong to a bot or a human"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Options:"));
}
