//! Integration tests for the process-wide argument store
//!
//! All tests touch the same instance, so they run serially.

use argkit::args::shared;
use argkit::{ArgValue, Color, TextStyle};
use serial_test::serial;

#[test]
#[serial]
fn test_shared_store_is_a_single_instance() {
    let first = shared() as *const _;
    let second = shared() as *const _;
    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_shared_store_parse_replaces_map() {
    shared()
        .write()
        .unwrap()
        .parse(&["tool", "--first", "positional"]);
    shared().write().unwrap().parse(&["tool", "--second"]);

    let store = shared().read().unwrap();
    assert!(!store.has("first", None));
    assert_eq!(store.get("second", None), Some(&ArgValue::Flag));
    assert_eq!(store.default_argument(), None);
}

#[test]
#[serial]
fn test_shared_store_drives_styling() {
    shared().write().unwrap().parse(&["tool", "--color"]);
    let styled = TextStyle::new("ok", &shared().read().unwrap()).color_foreground(Color::Green);
    assert_eq!(styled.render(), "\x1b[0;32m\x1b[40mok\x1b[0m");

    shared().write().unwrap().parse(&["tool"]);
    let plain = TextStyle::new("ok", &shared().read().unwrap());
    assert_eq!(plain.render(), "ok");
}

#[test]
#[serial]
fn test_shared_store_readable_from_threads() {
    shared()
        .write()
        .unwrap()
        .parse(&["tool", "-p", "8080"]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let store = shared().read().unwrap();
                store.value::<u16>("port", Some("p")).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(8080));
    }
}
