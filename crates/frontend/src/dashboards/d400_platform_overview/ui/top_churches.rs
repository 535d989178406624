use crate::shared::components::stat_card::{format_thousands, format_value, StatFormat};
use crate::shared::export::CsvExportable;
use contracts::dashboards::d400_platform_overview::TopChurch;
use leptos::prelude::*;

pub const EXPORT_FILE_NAME: &str = "igrejas_destaque.csv";

fn location(church: &TopChurch) -> String {
    match (church.city.trim(), church.state.trim()) {
        ("", "") => "-".to_string(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{}/{}", city, state),
    }
}

impl CsvExportable for TopChurch {
    fn headers() -> Vec<&'static str> {
        vec!["Igreja", "Denominação", "Local", "Plano", "Membros", "Visitantes", "Crescimento (%)"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.denomination_name.clone().unwrap_or_default(),
            location(self),
            self.subscription_plan.clone().unwrap_or_default(),
            self.members_count.to_string(),
            self.visitors_count.to_string(),
            format!("{:.1}", self.growth_rate).replace('.', ","),
        ]
    }
}

#[component]
pub fn TopChurchesTable(#[prop(into)] churches: Signal<Vec<TopChurch>>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Igreja"</th>
                        <th class="hide-mobile">"Denominação"</th>
                        <th class="hide-mobile">"Local"</th>
                        <th class="text-right">"Membros"</th>
                        <th class="text-right hide-mobile">"Visitantes"</th>
                        <th class="text-right">"Crescimento"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || churches.get().into_iter().enumerate().map(|(i, c)| {
                        let growth_class = if c.growth_rate < 0.0 { "text-right negative" } else { "text-right" };
                        view! {
                            <tr>
                                <td>{i + 1}</td>
                                <td>{c.name.clone()}</td>
                                <td class="hide-mobile">{c.denomination_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td class="hide-mobile">{location(&c)}</td>
                                <td class="text-right">{format_thousands(c.members_count as i64)}</td>
                                <td class="text-right hide-mobile">{format_thousands(c.visitors_count as i64)}</td>
                                <td class=growth_class>{format_value(c.growth_rate, StatFormat::Percent)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    fn church(city: &str, state: &str) -> TopChurch {
        TopChurch {
            id: 1,
            name: "Igreja Central".to_string(),
            denomination_name: None,
            city: city.to_string(),
            state: state.to_string(),
            members_count: 1200,
            visitors_count: 35,
            growth_rate: 4.3,
            subscription_plan: Some("professional".to_string()),
        }
    }

    #[test]
    fn test_location() {
        assert_eq!(location(&church("Recife", "PE")), "Recife/PE");
        assert_eq!(location(&church("", "PE")), "PE");
        assert_eq!(location(&church(" ", "")), "-");
    }

    #[test]
    fn test_csv_row() {
        let csv = build_csv(&[church("Recife", "PE")]);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Igreja Central;;Recife/PE;professional;1200;35;4,3");
    }
}
