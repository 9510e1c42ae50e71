use super::*;

fn registry() -> Arc<Registry> {
    Arc::new(Registry::builtin())
}

#[test]
fn context_without_initial_id_uses_default_user() {
    let ctx = MockAuthContext::new(registry(), None);
    assert_eq!(ctx.user.id, "mock-user-1");
}

#[test]
fn context_with_registered_id_uses_that_user() {
    let ctx = MockAuthContext::new(registry(), Some("mock-user-3"));
    assert_eq!(ctx.user.first_name, "Carol");
}

#[test]
fn context_with_unknown_id_falls_back_to_default() {
    let ctx = MockAuthContext::new(registry(), Some("nonexistent"));
    assert_eq!(ctx.user.id, "mock-user-1");
}

#[test]
fn use_user_reads_provided_context_and_is_loaded() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(MockAuthContext::new(registry(), Some("mock-user-2")));
        let UseUser { user, is_loaded } = use_user();
        assert_eq!(user.first_name, "Bob");
        assert!(is_loaded);
    });
}
