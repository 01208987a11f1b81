use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::TextKey;
use crate::shared::modal::Modal;
use crate::usecases::u501_select_filters::context::use_filters;

/// Подтверждение применения: оставить старый фильтр или применить новый.
///
/// Closing this layer without a choice cancels the whole edit.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let filters = use_filters();

    view! {
        <Show when=move || filters.is_confirm_open()>
            <Modal
                title=Signal::derive(move || ctx.t(TextKey::ConfirmTitle).to_string())
                on_close=Callback::new(move |_| filters.close())
                z_index=1100
                modal_class="confirm-modal"
            >
                <div class="confirm-modal__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| filters.use_old()
                    >
                        {move || ctx.t(TextKey::UseOldFilter)}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| filters.apply_new()
                    >
                        {move || ctx.t(TextKey::ApplyNewFilter)}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
