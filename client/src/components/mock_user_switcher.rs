//! Developer dropdown for switching the active mock user.
//!
//! Selecting an entry writes the selection cookie and reloads the page; see
//! `util::selection`.

#[cfg(test)]
#[path = "mock_user_switcher_test.rs"]
mod mock_user_switcher_test;

use leptos::prelude::*;
use users::Registry;

use crate::state::auth::MockAuthContext;
use crate::util::selection::select_mock_user;

/// One row of the switcher menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitcherEntry {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// Every registry user in order, with `active_id` marked.
pub fn switcher_entries(registry: &Registry, active_id: &str) -> Vec<SwitcherEntry> {
    registry
        .users()
        .iter()
        .map(|u| SwitcherEntry { id: u.id.clone(), label: u.full_name(), active: u.id == active_id })
        .collect()
}

pub fn entry_class(active: bool) -> &'static str {
    if active { "mock-user-switcher__item bg-accent" } else { "mock-user-switcher__item" }
}

#[component]
pub fn MockUserSwitcher() -> impl IntoView {
    let ctx = expect_context::<MockAuthContext>();
    let open = RwSignal::new(false);
    let entries = switcher_entries(&ctx.registry, &ctx.user.id);
    let trigger_label = ctx.user.full_name();

    view! {
        <div class="mock-user-switcher">
            <button
                type="button"
                class="mock-user-switcher__trigger gap-1.5 text-xs text-zinc-500 hover:text-zinc-700 dark:hover:text-zinc-300"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="mock-user-switcher__icon" aria-hidden="true">"👥"</span>
                {trigger_label}
                <span class="mock-user-switcher__chevron" aria-hidden="true">"▾"</span>
            </button>
            <div role="menu" class="mock-user-switcher__menu w-48" class:hidden=move || !open.get()>
                <div class="mock-user-switcher__label text-xs font-normal text-zinc-500">"Switch mock user"</div>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let id = entry.id.clone();
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                class=entry_class(entry.active)
                                aria-current=entry.active.then_some("true")
                                on:click=move |_| select_mock_user(&id)
                            >
                                {entry.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
