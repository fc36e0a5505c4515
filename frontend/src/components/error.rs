use crate::api::ApiError;
use leptos::*;

/// Validation details arrive either as `{"message": [..]}` or `{"errors": [..]}`.
fn detail_lines(error: &ApiError) -> Vec<String> {
    let Some(details) = error.details.as_ref() else {
        return Vec::new();
    };
    ["errors", "message"]
        .iter()
        .filter_map(|key| details.get(*key).and_then(|v| v.as_array()))
        .next()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let lines = detail_lines(&e);
                    if lines.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    } else if let Some(status) = e.status {
                        view! { <div class="text-xs opacity-75">{format!("HTTP {}", status)}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_lines_reads_message_arrays() {
        let err = ApiError::http(
            400,
            "titulo vacío, id_tipo inválido",
            Some(json!({ "message": ["titulo vacío", "id_tipo inválido"] })),
        );
        assert_eq!(detail_lines(&err), vec!["titulo vacío", "id_tipo inválido"]);
        assert!(detail_lines(&ApiError::unknown("x")).is_empty());
    }
}
