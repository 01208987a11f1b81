use leptos::prelude::*;
use thaw::*;

use super::context::use_filters;
use super::ui::{ConfirmModal, FilterList, FilterModal};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::TextKey;

/// Страница выбора фильтров: сводка выбранных фильтров, кнопка открытия и модальные окна.
#[component]
pub fn FilterPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let filters = use_filters();

    Effect::new(move |_| {
        ctx.ensure_catalog();
    });

    let catalog = Signal::derive(move || ctx.catalog.with(|c| c.catalog().cloned()));

    // Without a catalog there is nothing to pick from: retry the load instead.
    let open_filters = move |_: leptos::ev::MouseEvent| {
        ctx.ensure_catalog();
        if catalog.with_untracked(|c| c.is_some()) {
            filters.open();
        }
    };

    view! {
        <div class="filter-page">
            <h1 class="filter-page__title">{move || ctx.t(TextKey::Title)}</h1>

            {move || {
                let (first_load, error) = ctx.catalog.with(|c| {
                    (
                        c.is_loading() && c.catalog().is_none(),
                        c.error().map(str::to_string),
                    )
                });
                if first_load {
                    view! {
                        <div class="filter-page__loading">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else if let Some(e) = error {
                    view! {
                        <div class="filter-page__error">
                            {format!("{}: {}", ctx.t(TextKey::Error), e)}
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <FilterList catalog=catalog />

            <Button appearance=ButtonAppearance::Primary on_click=open_filters>
                {move || ctx.t(TextKey::OpenFilters)}
            </Button>

            <FilterModal catalog=catalog />
            <ConfirmModal />
        </div>
    }
}
