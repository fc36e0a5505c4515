use crate::pages::dashboard::utils::DashboardStats;
use leptos::*;

#[component]
pub fn StatsSection(#[prop(into)] stats: Signal<Option<DashboardStats>>) -> impl IntoView {
    let value = move |pick: fn(&DashboardStats) -> usize| {
        Signal::derive(move || {
            stats
                .get()
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "-".to_string())
        })
    };
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <Metric label="Pendientes de mi aprobación" value=value(|s| s.pending_for_me) />
            <Metric label="Mis aprobadas" value=value(|s| s.approved) />
            <Metric label="Mis rechazadas" value=value(|s| s.rejected) />
            <Metric label="Total de mis solicitudes" value=value(|s| s.total) />
        </div>
    }
}

#[component]
fn Metric(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-surface-elevated border border-border shadow">
            <p class="text-xs font-semibold text-fg-muted uppercase tracking-wide">{label}</p>
            <p class="mt-3 text-3xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_counters() {
        let html = render_to_string(move || {
            let stats = Signal::derive(|| {
                Some(DashboardStats {
                    pending_for_me: 4,
                    approved: 7,
                    rejected: 2,
                    total: 13,
                })
            });
            view! { <StatsSection stats=stats /> }
        });
        assert!(html.contains("Pendientes de mi aprobación"));
        assert!(html.contains("13"));
        assert!(html.contains("7"));
    }

    #[test]
    fn shows_placeholder_without_stats() {
        let html = render_to_string(move || {
            view! { <StatsSection stats=Signal::derive(|| None) /> }
        });
        assert!(html.contains("Mis rechazadas"));
    }
}
