use super::*;

#[test]
fn line_without_separator_is_discarded() {
    let mut map = HeaderMap::new();

    map.append_line(b"");
    map.append_line(b"\r\n");
    map.append_line(b"not a header");
    map.append_line(b"HTTP/1.1 200 OK");

    assert!(map.is_empty());
}

#[test]
fn line_value_is_cut_at_carriage_return() {
    let mut map = HeaderMap::new();
    map.append_line(b"Content-Length: 42\r");

    let (name, value) = map.iter().next().unwrap();
    assert_eq!(name.as_str(), "Content-Length");
    assert_eq!(value.as_str(), "42");
}

#[test]
fn line_with_no_value_stores_empty_string() {
    let mut map = HeaderMap::new();
    map.append_line(b"X-Empty:");

    assert_eq!(map.get("x-empty").unwrap().as_str(), "");
}

#[test]
fn line_leading_whitespace_is_skipped() {
    let mut map = HeaderMap::new();
    map.append_line(b"ETag: \t \"0x8D2\"\r");

    assert_eq!(map.get("etag").unwrap().as_str(), "\"0x8D2\"");
}

#[test]
fn name_case_is_preserved_at_storage() {
    let mut map = HeaderMap::new();
    map.append_line(b"content-length: 1");
    map.append_line(b"Content-Length: 2");

    let names: Vec<&str> = map.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["content-length", "Content-Length"]);
}

#[test]
fn duplicate_names_are_all_retained() {
    let mut map = HeaderMap::new();
    map.append("Set-Cookie", "a=1");
    map.append("set-cookie", "b=2");

    assert_eq!(map.len(), 2);

    let mut all = map.get_all("Set-Cookie");
    assert_eq!(all.next().unwrap().as_str(), "a=1");
    assert_eq!(all.next().unwrap().as_str(), "b=2");
    assert!(all.next().is_none());
}

#[test]
fn lookup_is_case_insensitive() {
    let mut map = HeaderMap::new();
    map.append("ETag", "tag");

    assert!(map.contains_key("etag"));
    assert!(map.contains_key("ETAG"));
    assert_eq!(map.get("eTaG").unwrap().as_str(), "tag");
    assert!(map.get("etags").is_none());
}

#[test]
fn insert_replaces_every_duplicate() {
    let mut map = HeaderMap::new();
    map.append("x-ms-meta-key", "one");
    map.append("X-Ms-Meta-Key", "two");

    let replaced = map.insert("x-ms-meta-key", "three");
    assert_eq!(replaced.unwrap().as_str(), "one");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x-ms-meta-key").unwrap().as_str(), "three");
}

#[test]
fn remove_returns_first_value() {
    let mut map = HeaderMap::new();
    map.append("a", "1");
    map.append("A", "2");
    map.append("b", "3");

    assert_eq!(map.remove("a").unwrap().as_str(), "1");
    assert_eq!(map.len(), 1);
    assert!(map.remove("a").is_none());
}

#[test]
fn iteration_preserves_insertion_order() {
    let mut map = HeaderMap::new();
    map.append_line(b"B: 2\r");
    map.append("A", "1");
    map.append("B", "3");

    let entries: Vec<(&str, &str)> = map.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect();
    assert_eq!(entries, [("B", "2"), ("A", "1"), ("B", "3")]);
}

#[test]
fn invalid_utf8_line_is_discarded() {
    let mut map = HeaderMap::new();
    map.append_line(b"X-Bin: \xff\xfe");

    assert!(map.is_empty());
}
