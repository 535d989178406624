//! Menu lateral agrupado; itens filtrados pelo papel do usuário

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::system::auth::UserRole;
use leptos::prelude::*;

struct MenuItem {
    key: &'static str,
    icon: &'static str,
    allow: fn(UserRole) -> bool,
}

struct MenuGroup {
    label: &'static str,
    items: Vec<MenuItem>,
}

fn everyone(_: UserRole) -> bool {
    true
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Plataforma",
            items: vec![MenuItem {
                key: "d400_platform_overview",
                icon: "bar-chart",
                allow: UserRole::is_platform_admin,
            }],
        },
        MenuGroup {
            label: "Pessoas",
            items: vec![
                MenuItem { key: "a004_member", icon: "users", allow: everyone },
                MenuItem { key: "a005_visitor", icon: "user", allow: everyone },
                MenuItem {
                    key: "u501_import_members",
                    icon: "upload",
                    allow: UserRole::can_manage_members,
                },
            ],
        },
        MenuGroup {
            label: "Igreja",
            items: vec![
                MenuItem { key: "a007_activity", icon: "calendar", allow: everyone },
                MenuItem { key: "a006_prayer_request", icon: "heart", allow: everyone },
                MenuItem {
                    key: "a003_branch",
                    icon: "qr-code",
                    allow: UserRole::can_manage_branches,
                },
            ],
        },
    ]
}

/// Itens visíveis para o papel; grupos vazios somem
fn visible_groups(role: UserRole) -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    menu_groups()
        .into_iter()
        .filter_map(|group| {
            let items: Vec<_> = group
                .items
                .into_iter()
                .filter(|item| (item.allow)(role))
                .map(|item| (item.key, item.icon))
                .collect();
            (!items.is_empty()).then_some((group.label, items))
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    view! {
        <nav class="app-sidebar__content">
            {move || visible_groups(auth_state.with(|s| s.role())).into_iter().map(|(label, items)| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{label}</div>
                    {items.into_iter().map(|(key, icon_name)| {
                        let title = tab_label_for_key(key);
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
                                on:click=move |_| ctx.open_tab(key, title)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: UserRole) -> Vec<&'static str> {
        visible_groups(role)
            .into_iter()
            .flat_map(|(_, items)| items.into_iter().map(|(k, _)| k))
            .collect()
    }

    #[test]
    fn test_member_sees_no_admin_items() {
        let k = keys(UserRole::Member);
        assert!(k.contains(&"a004_member"));
        assert!(!k.contains(&"u501_import_members"));
        assert!(!k.contains(&"d400_platform_overview"));
        assert!(!k.contains(&"a003_branch"));
    }

    #[test]
    fn test_super_admin_sees_everything() {
        let k = keys(UserRole::SuperAdmin);
        assert_eq!(k.len(), 7);
        assert_eq!(visible_groups(UserRole::SuperAdmin)[0].0, "Plataforma");
    }
}
