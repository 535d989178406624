use crate::domain::a008_notification::api;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use contracts::domain::a008_notification::{Notification, NotificationPriority};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn priority_class(priority: NotificationPriority) -> &'static str {
    match priority {
        NotificationPriority::Low => "notification--low",
        NotificationPriority::Normal => "notification--normal",
        NotificationPriority::High => "notification--high",
        NotificationPriority::Critical => "notification--critical",
    }
}

/// Texto do badge; acima de 99 mostra "99+"
fn badge_text(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Link de ação da notificação, se houver
fn action_target(n: &Notification) -> Option<String> {
    n.action_url.as_deref().map(str::trim).filter(|u| !u.is_empty()).map(str::to_string)
}

fn refresh_count(unread: RwSignal<u32>) {
    spawn_local(async move {
        match api::unread_count().await {
            Ok(c) => unread.set(c.count),
            Err(e) => log::warn!("contador de notificações: {}", e),
        }
    });
}

/// Sino do cabeçalho. O contador é consultado ao montar e a cada
/// `notification_poll_ms` enquanto o componente existir.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let unread = RwSignal::new(0u32);
    let items = RwSignal::new(Vec::<Notification>::new());
    let is_open = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    refresh_count(unread);
    let interval = StoredValue::new_local(Some(Interval::new(
        app_config().notification_poll_ms,
        move || refresh_count(unread),
    )));
    on_cleanup(move || {
        // soltar o Interval para o setInterval
        interval.set_value(None);
    });

    let toggle = move |_| {
        let opening = !is_open.get_untracked();
        is_open.set(opening);
        if !opening {
            return;
        }
        is_loading.set(true);
        spawn_local(async move {
            match api::list_notifications().await {
                Ok(page) => items.set(page.results),
                Err(e) => log::warn!("notificações: {}", e),
            }
            is_loading.set(false);
        });
    };

    // navegar só depois do mark_read: trocar de página cancela o request
    let open_item = move |n: Notification| {
        let target = action_target(&n);
        spawn_local(async move {
            if !n.is_read {
                match api::mark_read(n.id).await {
                    Ok(_) => {
                        items.update(|list| {
                            if let Some(item) = list.iter_mut().find(|i| i.id == n.id) {
                                item.is_read = true;
                            }
                        });
                        unread.update(|c| *c = c.saturating_sub(1));
                    }
                    Err(e) => log::warn!("notificação {}: {}", n.id, e),
                }
            }
            if let Some(url) = target {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            match api::mark_all_read().await {
                Ok(_) => {
                    items.update(|list| list.iter_mut().for_each(|i| i.is_read = true));
                    unread.set(0);
                }
                Err(e) => log::error!("marcar todas como lidas: {}", e),
            }
        });
    };

    view! {
        <div class="notification-bell">
            <button class="icon-btn notification-bell__trigger" title="Notificações" on:click=toggle>
                {icon("bell")}
                {move || badge_text(unread.get()).map(|t| view! {
                    <span class="notification-bell__badge">{t}</span>
                })}
            </button>
            <Show when=move || is_open.get()>
                <div class="notification-bell__dropdown">
                    <div class="notification-bell__header">
                        <strong>"Notificações"</strong>
                        <button class="btn-link" disabled=move || unread.get() == 0 on:click=mark_all>
                            "Marcar todas como lidas"
                        </button>
                    </div>
                    <Show
                        when=move || !items.with(Vec::is_empty)
                        fallback=move || view! {
                            <div class="empty-state">
                                {move || if is_loading.get() { "Carregando..." } else { "Nenhuma notificação" }}
                            </div>
                        }
                    >
                        <ul class="notification-list">
                            <For
                                each=move || items.get()
                                key=|n| (n.id, n.is_read)
                                children=move |n: Notification| {
                                    let class = format!(
                                        "notification {} {}",
                                        priority_class(n.priority),
                                        if n.is_read { "notification--read" } else { "" }
                                    );
                                    let when = n
                                        .created_at
                                        .with_timezone(&chrono::Local)
                                        .format("%d/%m %H:%M")
                                        .to_string();
                                    let item = StoredValue::new(n.clone());
                                    view! {
                                        <li class=class on:click=move |_| open_item(item.get_value())>
                                            <span class="notification__title">{n.title}</span>
                                            <span class="notification__message">{n.message}</span>
                                            <span class="notification__time">{when}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(7), Some("7".to_string()));
        assert_eq!(badge_text(99), Some("99".to_string()));
        assert_eq!(badge_text(150), Some("99+".to_string()));
    }

    #[test]
    fn test_action_target() {
        let parse = |action: &str| -> Notification {
            serde_json::from_str(&format!(
                r#"{{"id": 3, "title": "Novo visitante", "created_at": "2024-05-01T12:00:00Z"{}}}"#,
                action
            ))
            .unwrap()
        };
        assert_eq!(action_target(&parse(r#", "action_url": "/visitors/8""#)), Some("/visitors/8".to_string()));
        assert_eq!(action_target(&parse(r#", "action_url": "  ""#)), None);
        assert_eq!(action_target(&parse("")), None);
    }
}
