pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Estrutura da área logada:
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   Abas/conteúdo  |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(sidebar: L, content: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>{sidebar()}</left::Left>
                <div class="app-main">{content()}</div>
            </div>
        </div>
    }
}
