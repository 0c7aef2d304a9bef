use super::utils;

#[test]
#[ignore]
fn test_bot_args() {
    let lines = utils::UaprobeCli::run(vec![
        "bot",
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
        "curl/8.4.0",
    ])
    .unwrap();
    assert_eq!(lines, "bot\nhuman\nbot\n");
}

#[test]
#[ignore]
fn test_bot_stdin_dash() {
    let lines = utils::UaprobeCli::run_with_stdin(
        vec!["bot", "python-requests/2.31.0", "-"],
        "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:50.0) Gecko/20100101 Firefox/50.0\n",
    )
    .unwrap();
    assert_eq!(lines, "bot\nhuman\n");
}
