//! # Usage Walkthrough
//!
//! Each primitive used the way a test author would, with the panicking
//! reporter. Everything here passes unless stated otherwise.

use std::io;
use vouch::{Fatal, Reporter, assert_equal, with_frame_wrapper};

#[test]
fn nilness() {
    let t = Fatal;
    vouch::nil(&t, &None::<()>, "nothing");
    vouch::not_nil(&t, &"abc", "string");
    vouch::not_nil(&t, &(1_u8, "a"), "tuple");

    #[derive(Debug)]
    struct Empty {}
    impl vouch::Absence for Empty {}
    vouch::not_nil(&t, &Empty {}, "empty struct");
}

#[test]
fn booleans() {
    let t = Fatal;
    vouch::is_true(&t, true, "boolean true");
    vouch::is_false(&t, false, "boolean false");
}

#[test]
fn anonymous_records_compare_structurally() {
    let t = Fatal;

    let s1: (&str, i32) = ("testString", 1);
    let s2: (&str, i32) = ("testString", 1);
    assert_equal!(&t, s1, s2, "anonymous tuple");

    #[derive(Debug, PartialEq)]
    struct Record {
        a: String,
        b: i32,
    }
    assert_equal!(
        &t,
        Record {
            a: "x".to_string(),
            b: 1
        },
        Record {
            a: "x".to_string(),
            b: 1
        },
        "record"
    );
}

#[test]
fn errors() {
    let t = Fatal;
    let err1 = io::Error::other("this is an error");
    let err2: Option<&io::Error> = None;

    vouch::err(&t, Some(&err1), Some(&io::Error::other("this is an error")));
    vouch::no_err(&t, err2);
    vouch::exists_err(&t, Some(&err1), "valid error");
}

#[test]
fn results_are_checked_through_their_error() {
    let t = Fatal;
    let parsed: Result<u16, std::num::ParseIntError> = "8080".parse();
    vouch::no_err(&t, parsed.as_ref().err());

    let failed: Result<u16, std::num::ParseIntError> = "port".parse();
    vouch::exists_err(&t, failed.as_ref().err(), "bad port");
}

#[test]
fn with_custom_assertion() {
    assert_custom(&Fatal, "foobar", "foobar");
}

#[test]
#[should_panic(expected = "actual sample string [\"foo\"] != expected sample string [\"bar\"]")]
fn custom_assertion_failure_fails_the_test() {
    assert_custom(&Fatal, "foo", "bar");
}

#[test]
#[should_panic(expected = "usage.rs:")]
fn failure_message_starts_with_the_location() {
    vouch::is_true(&Fatal, false, "never");
}

/// A custom assertion: wrap the reporter once and pass the wrapper on, so
/// failures point at the caller of `assert_custom`.
fn assert_custom(t: &impl Reporter, s1: &str, s2: &str) {
    let wt = with_frame_wrapper(t);
    assert_equal!(&wt, s1, s2, "sample string");
}
