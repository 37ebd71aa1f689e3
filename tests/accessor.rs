use isocookie::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn client_side_read() {
    let doc = MemoryDocument::from_raw("id=abc; theme=dark");
    let cookies = CookieAccessor::client(doc);

    let all = cookies.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all["id"], "abc");
    assert_eq!(all["theme"], "dark");

    assert_eq!(cookies.get("theme"), "dark");
    assert!(!cookies.check("missing"));
}

#[test]
fn server_side_combined_read() {
    let collector = CookieCollector::new();
    let mut cookies = CookieAccessor::server_parts(Some("a=1; b=2".to_owned()), collector.clone());

    cookies.set("b", "99", CookieAttributes::new().path("/"));

    let all = cookies.get_all();
    assert_eq!(all["a"], "1");
    assert_eq!(all["b"], "99");
}

#[test]
fn server_side_headers_as_collector() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, header::HeaderValue::from_static("session=open"));
    let outbound = HeaderMap::new();

    let mut cookies = CookieAccessor::server(&headers, outbound);
    assert_eq!(cookies.get("session"), "open");

    cookies.set("session", "closed", CookieAttributes::new());
    assert_eq!(cookies.get("session"), "closed");
}

#[test]
fn round_trip_of_encoded_values() {
    let doc = MemoryDocument::new();
    let mut cookies = CookieAccessor::client(doc);

    cookies.set("user name", "first value; really=tricky", CookieAttributes::new());
    assert_eq!(cookies.get("user name"), "first value; really=tricky");
    assert!(cookies.check("user name"));
}

#[test]
fn security_correction_applies_on_both_sides() {
    init();
    let doc = MemoryDocument::new();
    let mut client = CookieAccessor::client(doc.clone());
    client.set("x", "y", CookieAttributes::new().secure(false).same_site(SameSite::None));
    // MemoryDocument only keeps the name=value head, so assert via a server
    // sink where the queued entry keeps its attributes.
    let collector = CookieCollector::new();
    let mut server = CookieAccessor::server_parts(None, collector.clone());
    server.set("x", "y", CookieAttributes::new().secure(false).same_site(SameSite::None));
    assert!(collector.queued()[0].contains("Secure"));
}

#[test]
fn delete_all_empties_both_contexts() {
    let doc = MemoryDocument::from_raw("a=1; b=2");
    let mut client = CookieAccessor::client(doc);
    client.delete_all();
    assert_eq!(client.get("a"), "");
    assert_eq!(client.get("b"), "");

    let collector = CookieCollector::new();
    let mut server = CookieAccessor::server_parts(Some("a=1; b=2".to_owned()), collector);
    server.delete_all();
    assert_eq!(server.get("a"), "");
    assert_eq!(server.get("b"), "");
}

#[test]
fn empty_sources_parse_to_empty_maps() {
    assert!(parse_cookie_string("").is_empty());

    let cookies = CookieAccessor::server_parts(None, CookieCollector::new());
    assert!(cookies.get_all().is_empty());
}
