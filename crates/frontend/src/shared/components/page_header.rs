use crate::shared::icons::icon;
use leptos::prelude::*;

/// Cabeçalho de página: ícone, título, subtítulo e ações à direita
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
                <div>
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
                </div>
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </header>
    }
}
