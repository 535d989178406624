use crate::domain::a007_activity::api;
use crate::shared::components::PageHeader;
use crate::shared::debounce::RequestSeq;
use crate::shared::icons::icon;
use crate::shared::query_cache::{use_query_client, QueryKey};
use chrono::{DateTime, Local, NaiveDate, Utc};
use contracts::domain::a007_activity::{Activity, Ministry};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Agrupa por dia local, preservando a ordem de início
fn group_by_day(mut activities: Vec<Activity>) -> Vec<(NaiveDate, Vec<Activity>)> {
    activities.sort_by_key(|a| a.start_datetime);
    let mut groups: Vec<(NaiveDate, Vec<Activity>)> = Vec::new();
    for activity in activities {
        let day = activity.start_datetime.with_timezone(&Local).date_naive();
        match groups.last_mut() {
            Some((d, items)) if *d == day => items.push(activity),
            _ => groups.push((day, vec![activity])),
        }
    }
    groups
}

fn local_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M").to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn ActivitiesList() -> impl IntoView {
    let query_client = use_query_client();
    let ministries = RwSignal::new(Vec::<Ministry>::new());
    let activities = RwSignal::new(Vec::<Activity>::new());
    let selected_ministry = RwSignal::new(Option::<u64>::None);
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let seq = StoredValue::new(RequestSeq::new());

    spawn_local(async move {
        let key = QueryKey::new("activities/ministries");
        match query_client.fetch_cached(key, api::list_ministries).await {
            Ok(page) => ministries.set(page.results),
            Err(e) => log::warn!("ministérios: {}", e),
        }
    });

    Effect::new(move |_| {
        let query = api::ActivitiesQuery::upcoming(selected_ministry.get());
        let ticket = seq.with_value(RequestSeq::next);
        is_loading.set(true);
        spawn_local(async move {
            let key = QueryKey::with_params(api::RESOURCE, &query);
            let result = query_client
                .fetch_cached(key, || api::list_activities(&query))
                .await;
            if !seq.with_value(|s| s.is_current(ticket)) {
                return;
            }
            match result {
                Ok(page) => {
                    activities.set(page.results);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            is_loading.set(false);
        });
    });

    let groups = move || group_by_day(activities.get());

    view! {
        <div class="page">
            <PageHeader title="Atividades" icon_name="calendar" subtitle="Próximas atividades dos ministérios">
                <select
                    class="form-select"
                    on:change=move |ev| selected_ministry.set(event_target_value(&ev).parse::<u64>().ok())
                >
                    <option value="">"Todos os ministérios"</option>
                    <For
                        each=move || ministries.get()
                        key=|m| m.id
                        children=|m| view! { <option value=m.id.to_string()>{m.name}</option> }
                    />
                </select>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="activity-timeline" class:activity-timeline--loading=move || is_loading.get()>
                {move || groups().into_iter().map(|(day, items)| view! {
                    <section class="activity-day">
                        <h3 class="activity-day__title">{day.format("%d/%m/%Y").to_string()}</h3>
                        {items.into_iter().map(|a| {
                            let full = a.is_full();
                            let capacity = match a.max_participants {
                                Some(max) => format!("{}/{}", a.participants_count, max),
                                None => a.participants_count.to_string(),
                            };
                            view! {
                                <div class="activity-item" class:activity-item--full=full>
                                    <span class="activity-item__time">{local_time(a.start_datetime)}</span>
                                    <div class="activity-item__body">
                                        <strong>{a.name}</strong>
                                        {a.ministry_name.map(|m| view! { <span class="badge">{m}</span> })}
                                        <p class="activity-item__meta">
                                            {a.location}
                                            " · "
                                            {icon("users")}
                                            {capacity}
                                            {full.then_some(" (lotada)")}
                                        </p>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </section>
                }).collect_view()}
            </div>
            <Show when=move || !is_loading.get() && activities.with(Vec::is_empty)>
                <div class="empty-state">"Nenhuma atividade agendada"</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn activity(id: u64, start: DateTime<Utc>) -> Activity {
        Activity {
            id,
            ministry: None,
            ministry_name: None,
            name: format!("a{}", id),
            description: String::new(),
            start_datetime: start,
            end_datetime: None,
            location: String::new(),
            participants_count: 0,
            max_participants: None,
            is_public: true,
        }
    }

    #[test]
    fn test_group_by_day_sorts_and_groups() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
        let later_same_day = t0 + chrono::Duration::minutes(1);
        let next_week = t0 + chrono::Duration::days(7);
        let groups = group_by_day(vec![
            activity(3, next_week),
            activity(2, later_same_day),
            activity(1, t0),
        ]);
        assert_eq!(groups.len(), 2);
        let first: Vec<u64> = groups[0].1.iter().map(|a| a.id).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(groups[1].1[0].id, 3);
    }
}
