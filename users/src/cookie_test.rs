use super::*;

#[test]
fn selection_cookie_has_root_path_and_one_year_max_age() {
    assert_eq!(selection_cookie("mock-user-2"), "mock_user_id=mock-user-2; path=/; max-age=31536000");
}

#[test]
fn max_age_is_one_year_in_seconds() {
    assert_eq!(COOKIE_MAX_AGE_SECS, 31_536_000);
}

#[test]
fn find_cookie_among_several_pairs() {
    let header = "theme=dark; mock_user_id=mock-user-3; other=1";
    assert_eq!(find_cookie(header, "mock_user_id"), Some("mock-user-3".to_owned()));
    assert_eq!(find_cookie(header, "theme"), Some("dark".to_owned()));
}

#[test]
fn find_cookie_missing_or_empty_is_none() {
    assert_eq!(find_cookie("theme=dark", COOKIE_NAME), None);
    assert_eq!(find_cookie("", COOKIE_NAME), None);
    assert_eq!(find_cookie("mock_user_id=", COOKIE_NAME), None);
}

#[test]
fn find_cookie_skips_malformed_pairs() {
    assert_eq!(find_cookie("garbage; ;mock_user_id=mock-user-2", COOKIE_NAME), Some("mock-user-2".to_owned()));
}

#[test]
fn find_cookie_requires_exact_name() {
    assert_eq!(find_cookie("xmock_user_id=mock-user-2", COOKIE_NAME), None);
}

#[test]
fn selected_user_id_reads_written_cookie() {
    let written = selection_cookie("mock-user-2");
    assert_eq!(selected_user_id(&written).as_deref(), Some("mock-user-2"));
}

#[test]
fn find_cookie_percent_decodes_values() {
    assert_eq!(selected_user_id("mock_user_id=mock%2Duser%2D2").as_deref(), Some("mock-user-2"));
}

#[test]
fn find_cookie_last_duplicate_wins() {
    let header = "mock_user_id=mock-user-2; mock_user_id=mock-user-3";
    assert_eq!(selected_user_id(header).as_deref(), Some("mock-user-3"));
}

#[test]
fn find_cookie_trailing_empty_duplicate_is_absent() {
    assert_eq!(selected_user_id("mock_user_id=mock-user-2; mock_user_id="), None);
}

#[test]
fn selection_cookie_encodes_reserved_characters() {
    let written = selection_cookie("dev user;1");
    assert!(written.starts_with("mock_user_id=dev%20user%3B1; path=/;"));
    assert_eq!(selected_user_id(&written).as_deref(), Some("dev user;1"));
}
