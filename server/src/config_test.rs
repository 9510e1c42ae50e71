use super::*;

// =============================================================================
// from_env
// =============================================================================

#[test]
fn cookie_secure_follows_env_flag_and_defaults_off() {
    // Only this test touches COOKIE_SECURE.
    for (raw, expected) in [(" yes ", true), ("TRUE", true), ("off", false), ("maybe", false)] {
        unsafe { std::env::set_var("COOKIE_SECURE", raw) };
        assert_eq!(ServerConfig::from_env().unwrap().cookie_secure, expected, "COOKIE_SECURE={raw:?}");
    }
    unsafe { std::env::remove_var("COOKIE_SECURE") };
    assert!(!ServerConfig::from_env().unwrap().cookie_secure);
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_numbers() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(ref v)) if v == "http"));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_))));
}

// =============================================================================
// ImageAllowlist
// =============================================================================

#[test]
fn default_allowlist_has_two_hosts() {
    assert_eq!(ImageAllowlist::default().hosts(), ["utfs.io", "img.clerk.com"]);
    assert_eq!(ImageAllowlist::parse(None), ImageAllowlist::default());
    assert_eq!(ImageAllowlist::parse(Some(" , ")), ImageAllowlist::default());
}

#[test]
fn parse_trims_and_lowercases_hosts() {
    let list = ImageAllowlist::parse(Some(" CDN.example.com , img.test "));
    assert_eq!(list.hosts(), ["cdn.example.com", "img.test"]);
}

#[test]
fn relative_paths_are_allowed() {
    assert!(ImageAllowlist::default().allows("/logo.png"));
}

#[test]
fn protocol_relative_and_http_urls_are_rejected() {
    let list = ImageAllowlist::default();
    assert!(!list.allows("//utfs.io/a.png"));
    assert!(!list.allows("http://utfs.io/a.png"));
}

#[test]
fn https_urls_match_on_host() {
    let list = ImageAllowlist::default();
    assert!(list.allows("https://utfs.io/f/abc.png"));
    assert!(list.allows("https://IMG.CLERK.COM/x?y=1"));
    assert!(list.allows("https://utfs.io:443/a.png"));
    assert!(!list.allows("https://evil.example/a.png"));
    assert!(!list.allows("https://utfs.io.evil.example/a.png"));
}

#[test]
fn rejected_avatars_lists_disallowed_users() {
    let raw = r"
- id: a
  firstName: A
  lastName: Z
  imageUrl: /logo.png
- id: b
  firstName: B
  lastName: Z
  imageUrl: https://elsewhere.test/b.png
";
    let registry = Registry::from_yaml(raw).unwrap();
    let rejected: Vec<_> = ImageAllowlist::default().rejected_avatars(&registry).into_iter().map(|u| u.id.as_str()).collect();
    assert_eq!(rejected, vec!["b"]);
}

// =============================================================================
// load_registry
// =============================================================================

fn config_with_file(path: Option<PathBuf>) -> ServerConfig {
    ServerConfig { port: DEFAULT_PORT, users_file: path, image_hosts: ImageAllowlist::default(), cookie_secure: false }
}

#[test]
fn load_registry_without_file_is_builtin() {
    assert_eq!(config_with_file(None).load_registry().unwrap(), Registry::builtin());
}

#[test]
fn load_registry_reads_yaml_file() {
    let path = std::env::temp_dir().join(format!("mock-users-{}.yaml", std::process::id()));
    std::fs::write(&path, "- id: only\n  firstName: Solo\n  lastName: User\n  imageUrl: /logo.png\n").unwrap();
    let registry = config_with_file(Some(path.clone())).load_registry().unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(registry.default_user_id(), "only");
}

#[test]
fn load_registry_missing_file_is_error() {
    let err = config_with_file(Some(PathBuf::from("/definitely/not/here.yaml"))).load_registry().unwrap_err();
    assert!(matches!(err, ConfigError::UsersFile { .. }));
}
