use contracts::domain::a001_filter::{FilterCatalog, FilterGroup};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::TextKey;
use crate::shared::modal::Modal;
use crate::usecases::u501_select_filters::context::use_filters;

/// Модальное окно выбора фильтров: группы каталога с чекбоксами значений.
///
/// Checkboxes reflect the edit session, not the applied filters.
#[component]
pub fn FilterModal(
    /// Loaded catalog; the modal renders only when it is available
    #[prop(into)]
    catalog: Signal<Option<FilterCatalog>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let filters = use_filters();

    view! {
        <Show when=move || filters.is_modal_open() && catalog.with(|c| c.is_some())>
            <Modal
                title=Signal::derive(move || ctx.t(TextKey::ModalTitle).to_string())
                on_close=Callback::new(move |_| filters.close())
                modal_class="filter-modal"
            >
                {move || {
                    catalog
                        .get()
                        .map(|c| {
                            c.filter_items
                                .into_iter()
                                .map(|group| view! { <FilterGroupSection group=group /> })
                                .collect_view()
                        })
                }}

                // Bottom panel with Apply and Clear buttons
                <div class="modal-footer filter-modal__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| filters.request_apply()
                    >
                        {move || ctx.t(TextKey::Apply)}
                    </Button>
                    <button
                        class="button button--link filter-modal__clear"
                        on:click=move |_| filters.clear_all()
                    >
                        {move || ctx.t(TextKey::ClearAllParameters)}
                    </button>
                </div>
            </Modal>
        </Show>
    }
}

#[component]
fn FilterGroupSection(group: FilterGroup) -> impl IntoView {
    let filters = use_filters();
    let FilterGroup { id, name, options } = group;

    view! {
        <section class="filter-group">
            <h3 class="filter-group__title">{name}</h3>
            <div class="filter-group__options">
                {options
                    .into_iter()
                    .map(|option| {
                        let group_for_checked = id.clone();
                        let group_for_change = id.clone();
                        let option_for_checked = option.id.clone();
                        let option_for_change = option.id.clone();
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    class="filter-option__checkbox"
                                    prop:checked=move || {
                                        filters.is_checked(&group_for_checked, &option_for_checked)
                                    }
                                    on:change=move |_| {
                                        filters.toggle(
                                            group_for_change.clone(),
                                            option_for_change.clone(),
                                        )
                                    }
                                />
                                <span>{option.name}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
