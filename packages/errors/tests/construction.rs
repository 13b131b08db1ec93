//! Construction and formatting of errors without call paths

use cryypt_errors::{Error, ResultExt, Verbosity, new, newf, unwrap, wrap, wrapf};
use proptest::prelude::*;
use std::error::Error as StdError;

#[test]
fn test_new_formats_at_every_verbosity() {
    let err = new("MyError");

    assert_eq!(format!("{err}"), "MyError");
    assert_eq!(format!("{err:?}"), "\"MyError\"");
    assert_eq!(err.rendered(Verbosity::Compact).to_string(), "MyError");
    assert_eq!(err.rendered(Verbosity::Quoted).to_string(), "\"MyError\"");
    assert_eq!(err.message(), "MyError");
    assert!(err.is_terminal());
    assert!(!err.has_path());
}

#[test]
fn test_verbose_without_path_equals_compact() {
    let err = new("no frames here");

    let verbose = format!("{err:#}");
    assert_eq!(verbose, "no frames here");
    assert!(!verbose.ends_with('\n'));
    assert_eq!(format!("{err:#?}"), verbose);
    assert_eq!(err.rendered(Verbosity::Verbose).to_string(), verbose);
}

#[test]
fn test_quoted_escapes_message() {
    let err = new("line one\n\"two\"");
    assert_eq!(format!("{err:?}"), "\"line one\\n\\\"two\\\"\"");
}

#[test]
fn test_newf_formats_message() {
    let id = 42;
    let err = newf!("record {id} missing from {}", "users");
    assert_eq!(err.to_string(), "record 42 missing from users");
    assert!(unwrap(&err).is_none());
}

#[test]
fn test_wrap_prefixes_message_and_keeps_cause() {
    let inner = new("connection refused");
    let outer = wrap(inner.clone(), "dial upstream");

    assert_eq!(outer.to_string(), "dial upstream: connection refused");
    assert_eq!(outer.message(), "dial upstream");
    assert!(!outer.is_terminal());

    let cause = unwrap(&outer).expect("wrap should expose its cause");
    assert_eq!(cause.downcast_ref::<Error>(), Some(&inner));
}

#[test]
fn test_wrapf_formats_prefix() {
    let err = wrapf!(new("timeout"), "attempt {} of {}", 3, 5);
    assert_eq!(err.to_string(), "attempt 3 of 5: timeout");
    assert_eq!(format!("{err:?}"), "\"attempt 3 of 5: timeout\"");
}

#[test]
fn test_wrap_accepts_foreign_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
    let err = wrap(io, "load settings");

    assert_eq!(err.to_string(), "load settings: config.toml");
    let source = err.source().expect("io error should be the source");
    assert!(source.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn test_scenario_three_layers() {
    let a = new("bottom");
    let b = wrap(a.clone(), "middle");
    let c = wrap(b.clone(), "top");

    assert_eq!(c.to_string(), "top: middle: bottom");

    let first = unwrap(&c).expect("c wraps b");
    assert_eq!(first.downcast_ref::<Error>(), Some(&b));

    let second = unwrap(first).expect("b wraps a");
    assert_eq!(second.downcast_ref::<Error>(), Some(&a));

    assert!(unwrap(second).is_none());
    assert!(cryypt_errors::is(&c, &a));
}

#[test]
fn test_clones_are_equal_but_twins_are_not() {
    let a = new("same");
    let twin = new("same");

    assert_eq!(a.clone(), a);
    assert_ne!(a, twin);
}

#[test]
fn test_result_ext_wraps_only_errors() {
    let ok: Result<u8, Error> = Ok(7);
    assert_eq!(ok.wrap_err("unused").expect("ok passes through"), 7);

    let failed: Result<u8, std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    let err = failed
        .wrap_err_with(|| format!("write block {}", 9))
        .expect_err("error should be wrapped");
    assert_eq!(err.to_string(), "write block 9: disk full");
    assert!(!err.has_path());
}

proptest! {
    #[test]
    fn prop_new_keeps_message(message in ".*") {
        let err = new(message.clone());
        prop_assert_eq!(err.to_string(), message.clone());
        prop_assert_eq!(format!("{err:#}"), message.clone());
        prop_assert_eq!(format!("{err:?}"), format!("{message:?}"));
        prop_assert!(unwrap(&err).is_none());
    }

    #[test]
    fn prop_wrap_composes_messages(inner in ".*", outer in ".*") {
        let base = new(inner.clone());
        let wrapped = wrap(base.clone(), outer.clone());
        prop_assert_eq!(wrapped.to_string(), format!("{outer}: {inner}"));

        let cause = unwrap(&wrapped).and_then(|e| e.downcast_ref::<Error>());
        prop_assert_eq!(cause, Some(&base));
    }

    #[test]
    fn prop_unwrap_walks_every_layer(depth in 0usize..24) {
        let mut layers = vec![new("root")];
        for i in 1..=depth {
            let next = wrap(layers[i - 1].clone(), format!("layer {i}"));
            layers.push(next);
        }

        let mut current: Option<&(dyn StdError + 'static)> = Some(&layers[depth]);
        for expected in layers.iter().rev() {
            let node = current.expect("chain ended early");
            prop_assert_eq!(node.downcast_ref::<Error>(), Some(expected));
            current = unwrap(node);
        }
        prop_assert!(current.is_none());
    }
}
