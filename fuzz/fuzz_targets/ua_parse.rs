#![no_main]

use libfuzzer_sys::fuzz_target;
use uaprobe::{UserAgent, UserAgentParser};

fuzz_target!(|input: &str| {
    let ua = UserAgent::new(input);
    assert_eq!(ua.header_str(), input);

    // the cap must never split a multi byte char
    let _ = UserAgentParser::new().with_max_length(input.len() / 2).parse(input);
});
