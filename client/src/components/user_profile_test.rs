use users::Registry;

use super::*;

#[test]
fn lines_show_name_and_first_email() {
    let registry = Registry::builtin();
    let bob = registry.get("mock-user-2");
    assert_eq!(name_line(bob), "Name: Bob Test");
    assert_eq!(email_line(bob), "Email: bob@test.com");
}

#[test]
fn email_line_is_blank_without_addresses() {
    let mut user = Registry::builtin().default_user().clone();
    user.email_addresses.clear();
    assert_eq!(email_line(&user), "Email: ");
}

#[cfg(feature = "ssr")]
#[test]
fn renders_active_user_from_context() {
    let html = Owner::new().with(|| {
        provide_context(crate::state::auth::MockAuthContext::new(std::sync::Arc::new(Registry::builtin()), Some("mock-user-3")));
        view! { <UserProfile/> }.to_html()
    });
    assert!(html.contains("Carol"));
    assert!(html.contains("carol@test.com"));
    assert!(html.contains("mock mode"));
}
