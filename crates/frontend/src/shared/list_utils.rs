/// Utilitários de listagem: busca com debounce e destaque de termos
use crate::shared::config::app_config;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Destaca ocorrências de `filter` em `text` (sem diferenciar maiúsculas)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }
    view! { <>{parts}</> }.into_any()
}

/// Intervalos em bytes de `text` onde `filter` aparece.
///
/// Compara caractere a caractere em minúsculas, então os índices valem para
/// o texto original mesmo com acentos.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let matches = chars[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|((_, c), n)| c.to_lowercase().eq(std::iter::once(*n)));
        if matches {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(idx, _)| *idx)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Campo de busca com debounce e botão de limpar.
///
/// Digitar reinicia o timer; `on_change` só recebe o valor depois da pausa.
/// Limpar dispara `on_change("")` imediatamente.
#[component]
pub fn SearchInput(
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Atraso em ms; padrão vem da configuração
    #[prop(optional)]
    delay_ms: Option<u32>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };
    let debouncer = Debouncer::new(delay_ms.unwrap_or_else(|| app_config().search_debounce_ms));
    let (input_value, set_input_value) = signal(String::new());

    let handle_input = move |value: String| {
        set_input_value.set(value.clone());
        debouncer.schedule(move || on_change.run(value));
    };

    let clear = move |_| {
        debouncer.cancel();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Ana Maria", "ma"), vec![(4, 6)]);
        assert_eq!(match_ranges("anana", "ANA"), vec![(0, 3)]);
        assert!(match_ranges("João", "").is_empty());
        assert!(match_ranges("João", "x").is_empty());
    }

    #[test]
    fn test_match_ranges_accented() {
        let text = "JOÃO e joão";
        let ranges = match_ranges(text, "joão");
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].0..ranges[0].1], "JOÃO");
        assert_eq!(&text[ranges[1].0..ranges[1].1], "joão");
    }
}
