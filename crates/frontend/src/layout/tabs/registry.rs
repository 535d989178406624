//! Chave da aba -> conteúdo. Único lugar que conhece todas as páginas.

use crate::dashboards::PlatformOverviewDashboard;
use crate::domain::a003_branch::ui::BranchesList;
use crate::domain::a004_member::ui::list::MembersList;
use crate::domain::a005_visitor::ui::list::VisitorsList;
use crate::domain::a006_prayer_request::ui::list::PrayersList;
use crate::domain::a007_activity::ui::list::ActivitiesList;
use crate::system::auth::RequirePermission;
use crate::usecases::u501_import_members::ImportMembersPage;
use contracts::system::auth::UserRole;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_platform_overview" => view! { <PlatformOverviewDashboard /> }.into_any(),
        "a003_branch" => view! { <BranchesList /> }.into_any(),
        "a004_member" => view! { <MembersList /> }.into_any(),
        "a005_visitor" => view! { <VisitorsList /> }.into_any(),
        "a006_prayer_request" => view! { <PrayersList /> }.into_any(),
        "a007_activity" => view! { <ActivitiesList /> }.into_any(),
        "u501_import_members" => view! {
            <RequirePermission allow=UserRole::can_manage_members>
                <ImportMembersPage />
            </RequirePermission>
        }
        .into_any(),
        unknown => {
            log::warn!("aba desconhecida: {}", unknown);
            let msg = format!("Página não encontrada: {}", unknown);
            view! { <div class="empty-state">{msg}</div> }.into_any()
        }
    }
}
