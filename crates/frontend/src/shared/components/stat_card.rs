use crate::shared::icons::icon;
use leptos::prelude::*;

/// Formato numérico do card (pt-BR)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    Integer,
    Percent,
    /// R$ com duas casas
    Money,
}

pub fn format_value(val: f64, fmt: StatFormat) -> String {
    match fmt {
        StatFormat::Integer => format_thousands(val.round() as i64),
        StatFormat::Percent => format!("{:.1}%", val).replace('.', ","),
        StatFormat::Money => {
            let cents = (val.abs() * 100.0).round() as i64;
            let sign = if val < 0.0 && cents > 0 { "-" } else { "" };
            format!("{}R$ {},{:02}", sign, format_thousands(cents / 100), cents % 100)
        }
    }
}

/// Separador de milhar `.`
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Nome para `icon()`
    icon_name: &'static str,
    /// `None` enquanto carrega
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    /// Variação % em relação ao período anterior
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.0 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < 0.0 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{}", arrow, format_value(pct.abs(), StatFormat::Percent));
            view! { <span class=cls>{text}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(1234567), "1.234.567");
        assert_eq!(format_thousands(-45000), "-45.000");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1520.0, StatFormat::Integer), "1.520");
        assert_eq!(format_value(12.34, StatFormat::Percent), "12,3%");
        assert_eq!(format_value(15499.9, StatFormat::Money), "R$ 15.499,90");
        assert_eq!(format_value(0.0, StatFormat::Money), "R$ 0,00");
    }
}
