use contracts::domain::a001_filter::{group_name, option_name, FilterCatalog};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::TextKey;
use crate::usecases::u501_select_filters::context::use_filters;

/// Summary of the applied filters with names taken from the catalog.
/// Unknown ids, or a catalog that has not loaded, show the raw ids.
#[component]
pub fn FilterList(
    #[prop(into)]
    catalog: Signal<Option<FilterCatalog>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let filters = use_filters();

    view! {
        <section class="filter-list">
            <h2 class="filter-list__title">{move || ctx.t(TextKey::SelectedFilters)}</h2>
            {move || {
                let selected = filters.selected_filters();
                if selected.is_empty() {
                    return view! {
                        <p class="filter-list__empty">{ctx.t(TextKey::NoFiltersSelected)}</p>
                    }
                    .into_any();
                }

                catalog.with(|catalog| {
                    let catalog = catalog.as_ref();
                    view! {
                        <div class="filter-list__items">
                            {selected
                                .iter()
                                .map(|filter| {
                                    let chips = filter
                                        .options_ids
                                        .iter()
                                        .map(|option_id| {
                                            view! {
                                                <span class="filter-chip">
                                                    {option_name(catalog, &filter.id, option_id)}
                                                </span>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <article class="filter-list__item">
                                            <h3 class="filter-list__group">
                                                {group_name(catalog, &filter.id)}
                                            </h3>
                                            <div class="filter-list__chips">{chips}</div>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                })
            }}
        </section>
    }
}
