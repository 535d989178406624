use super::top_churches::{TopChurchesTable, EXPORT_FILE_NAME};
use crate::dashboards::d400_platform_overview::api;
use crate::shared::components::stat_card::format_value;
use crate::shared::components::{PageHeader, StatCard, StatFormat};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::query_cache::{use_query_client, QueryKey};
use crate::system::auth::RequirePlatformAdmin;
use contracts::dashboards::d400_platform_overview::{PlatformOverview, TopChurch, TopChurchesQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;

const ORDER_OPTIONS: &[(&str, &str)] = &[
    ("members", "Membros"),
    ("visitors", "Visitantes"),
    ("growth", "Crescimento"),
];

/// Painel da plataforma (somente super admin)
#[component]
pub fn PlatformOverviewDashboard() -> impl IntoView {
    view! {
        <RequirePlatformAdmin>
            <PlatformOverviewContent />
        </RequirePlatformAdmin>
    }
}

#[component]
fn PlatformOverviewContent() -> impl IntoView {
    let query_client = use_query_client();
    let overview = RwSignal::new(Option::<PlatformOverview>::None);
    let top = RwSignal::new(Vec::<TopChurch>::new());
    let (order_by, set_order_by) = signal("members".to_string());
    let (error, set_error) = signal(Option::<String>::None);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            let key = QueryKey::new("platform/overview");
            match query_client.fetch_cached(key, api::get_overview).await {
                Ok(o) => overview.set(Some(o)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        let query = TopChurchesQuery {
            order_by: order_by.get(),
            ..Default::default()
        };
        spawn_local(async move {
            let key = QueryKey::with_params("platform/top_churches", &query);
            match query_client.fetch_cached(key, || api::get_top_churches(&query)).await {
                Ok(list) => top.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let stat = move |f: fn(&PlatformOverview) -> f64| Signal::derive(move || overview.with(|o| o.as_ref().map(f)));

    view! {
        <div class="page dashboard">
            <PageHeader title="Visão geral da plataforma" icon_name="bar-chart">
                <button class="icon-btn" title="Atualizar" on:click=move |_| {
                    query_client.invalidate(api::RESOURCE);
                    set_error.set(None);
                    reload.update(|n| *n += 1);
                }>
                    {icon("refresh")}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard label="Igrejas" icon_name="church" format=StatFormat::Integer
                    value=stat(|o| o.total_churches as f64)
                    subtitle=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| {
                        format!("{} ativas ({})", o.active_churches,
                            format_value(o.active_churches_percent(), StatFormat::Percent))
                    })))
                />
                <StatCard label="Membros" icon_name="users" format=StatFormat::Integer
                    value=stat(|o| o.total_members as f64)
                    change_percent=stat(|o| o.members_growth_percent)
                />
                <StatCard label="Visitantes" icon_name="user" format=StatFormat::Integer
                    value=stat(|o| o.total_visitors as f64)
                />
                <StatCard label="Filiais" icon_name="church" format=StatFormat::Integer
                    value=stat(|o| o.total_branches as f64)
                />
                <StatCard label="Usuários ativos" icon_name="user" format=StatFormat::Integer
                    value=stat(|o| o.active_users as f64)
                />
                <StatCard label="Receita mensal" icon_name="bar-chart" format=StatFormat::Money
                    value=stat(|o| o.monthly_revenue)
                    subtitle=Signal::derive(move || overview.with(|o| o.as_ref().map(|o| {
                        format!("{} igrejas novas no mês", o.new_churches_this_month)
                    })))
                />
            </div>

            <section class="dashboard__section">
                <div class="dashboard__section-header">
                    <h2>"Igrejas em destaque"</h2>
                    <div class="dashboard__section-actions">
                        <select class="form-select" on:change=move |ev| set_order_by.set(event_target_value(&ev))>
                            {ORDER_OPTIONS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                        <button class="icon-btn" title="Exportar CSV" on:click=move |_| {
                            if let Err(e) = top.with_untracked(|list| export_to_csv(list, EXPORT_FILE_NAME)) {
                                set_error.set(Some(e));
                            }
                        }>
                            {icon("download")}
                        </button>
                    </div>
                </div>
                <TopChurchesTable churches=top />
            </section>
        </div>
    }
}
