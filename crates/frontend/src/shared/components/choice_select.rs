use contracts::domain::common::Choice;
use leptos::prelude::*;

/// `<select>` montado a partir de um enum `Choice`.
///
/// Com `all_label` há uma opção vazia ("Todos") que vira `None`.
#[component]
pub fn ChoiceSelect<C>(
    value: RwSignal<Option<C>>,
    #[prop(optional, into)]
    all_label: Option<String>,
    #[prop(optional)]
    on_change: Option<Callback<Option<C>>>,
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView
where
    C: Choice + PartialEq + Send + Sync,
{
    let has_all = all_label.is_some();

    view! {
        <select
            id=id
            class="form-select"
            disabled=move || disabled.get()
            prop:value=move || value.get().map(|c| c.as_str()).unwrap_or("")
            on:change=move |ev| {
                let selected = C::parse(&event_target_value(&ev));
                if selected.is_none() && !has_all {
                    return;
                }
                value.set(selected);
                if let Some(handler) = on_change {
                    handler.run(selected);
                }
            }
        >
            {all_label.map(|label| view! { <option value="">{label}</option> })}
            {C::all()
                .iter()
                .map(|choice| {
                    let choice = *choice;
                    view! {
                        <option value=choice.as_str() selected=move || value.get() == Some(choice)>
                            {choice.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Badge colorido por valor (`badge--active`, `badge--pending`, ...)
#[component]
pub fn ChoiceBadge<C>(choice: C) -> impl IntoView
where
    C: Choice,
{
    view! {
        <span class=format!("badge badge--{}", choice.as_str())>{choice.label()}</span>
    }
}
