use crate::shared::masks::MaskKind;
use leptos::prelude::*;

/// Input que reaplica a máscara a cada tecla.
///
/// `value` guarda o texto exibido (com máscara); use `remove_mask` ao montar
/// o payload para o backend.
#[component]
pub fn MaskedInput(
    kind: MaskKind,
    value: RwSignal<String>,
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            inputmode="numeric"
            id=id
            class="form-input"
            placeholder=kind.placeholder()
            maxlength=kind.max_len().to_string()
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=move |ev| value.set(kind.apply(&event_target_value(&ev)))
        />
    }
}
