pub mod global_context;

use global_context::AppGlobalContext;
use leptos::prelude::*;

use crate::shared::i18n::Locale;

/// Application shell: top bar with the language switch, content below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <div class="top-header__locales">
                    {Locale::all()
                        .into_iter()
                        .map(|locale| {
                            view! {
                                <button
                                    class=move || {
                                        if ctx.locale.get() == locale {
                                            "locale-button locale-button--active"
                                        } else {
                                            "locale-button"
                                        }
                                    }
                                    on:click=move |_| ctx.set_locale(locale)
                                >
                                    {locale.code()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
