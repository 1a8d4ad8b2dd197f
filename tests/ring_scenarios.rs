// ClipRing - Scenarios de bout en bout
// L'hote copie, la vue se rafraichit sur notification et relit le ring.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clipring::clipboard::toolbox::{get_full_text, get_search_text};
use clipring::{matches, App, ClipboardRing, Settings, SharedRing, ToolboxItem};

fn texts(ring: &ClipboardRing) -> Vec<String> {
    ring.items().iter().map(|e| e.text().to_string()).collect()
}

#[test]
fn test_twenty_one_distinct_copies() {
    let mut ring = ClipboardRing::new();
    for i in 0..=20 {
        ring.record(&format!("t{}", i));
    }
    let expected: Vec<String> = (1..=20).map(|i| format!("t{}", i)).collect();
    assert_eq!(texts(&ring), expected);
}

#[test]
fn test_view_refreshes_on_each_notification() {
    let mut app = App::new(Settings::default());
    let refreshes = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&refreshes);
    let id = app.subscribe(move || {
        r.fetch_add(1, Ordering::SeqCst);
    });

    app.on_copy(Some("let x = 1;"));
    app.on_copy(None);
    app.on_copy(Some(""));
    app.on_copy(Some("let y = 2;"));
    app.on_copy(Some("let x = 1;"));
    assert_eq!(refreshes.load(Ordering::SeqCst), 3);

    let nodes = app.toolbox_items(None);
    let shown: Vec<&str> = nodes.iter().map(|n| n.full_text()).collect();
    assert_eq!(shown, vec!["let x = 1;", "let y = 2;"]);

    assert!(app.unsubscribe(id));
    app.on_copy(Some("let z = 3;"));
    assert_eq!(refreshes.load(Ordering::SeqCst), 3);
}

#[test]
fn test_host_capabilities_per_item() {
    let mut ring = ClipboardRing::new();
    ring.record("line one here\nline two\nline three\nline four");
    let item = ring.latest().unwrap();
    assert_eq!(get_search_text(item), "line one here\nline two\nline three");
    assert_eq!(get_full_text(item), "line one here\nline two\nline three\nline four");
    assert_eq!(
        item.display_name(),
        "line one here\\nline two\\nline three\\nline four"
    );
    assert!(matches(item, "LINE FOUR"));
    assert!(!matches(item, "line five"));

    ring.record("a first line well over sixteen\nsecond");
    let long = ring.latest().unwrap();
    assert_eq!(get_search_text(long), "a first line wel...\nsecond");
}

#[test]
fn test_recopy_keeps_cached_fields() {
    let mut ring = ClipboardRing::with_capacity(3);
    let long = format!("{}\t{}", "k".repeat(260), "tail");
    ring.record(&long);
    let name_before = ring.latest().unwrap().display_name().to_string();
    ring.record("a");
    ring.record("b");
    ring.record(&long);
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.latest().unwrap().display_name(), name_before);
    assert_eq!(name_before.chars().count(), 250);
}

#[test]
fn test_shared_ring_across_threads() {
    let shared = SharedRing::new(ClipboardRing::with_capacity(4));
    let writer = {
        let ring = shared.clone();
        std::thread::spawn(move || {
            for i in 0..10 {
                ring.record(&format!("snippet {}", i));
            }
        })
    };
    writer.join().unwrap();
    let texts: Vec<String> = shared.snapshot().iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, vec!["snippet 6", "snippet 7", "snippet 8", "snippet 9"]);
}
