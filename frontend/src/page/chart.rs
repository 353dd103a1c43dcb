use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::fetch_transactions;
use crate::model::{conic_gradient, expense_breakdown, format_money, slice_color, Transaction};

#[component]
pub fn ChartPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal::<Option<String>>(None);
    let (items, set_items) = signal::<Vec<Transaction>>(vec![]);

    spawn_local(async move {
        match fetch_transactions().await {
            Ok(list) => set_items.set(list),
            Err(e) => set_error_msg.set(Some(format!("Could not load chart data: {e}"))),
        }
        set_loading.set(false);
    });

    let chart = move || {
        let slices = expense_breakdown(&items.get());
        if slices.is_empty() {
            return view! { <p class="muted" style="margin:0;">"No expense data."</p> }.into_any();
        }

        let pie_style = format!("background: {};", conic_gradient(&slices));
        view! {
            <div class="chart">
                <div class="pie" style=pie_style></div>
                <ul class="legend">
                    {slices
                        .into_iter()
                        .enumerate()
                        .map(|(i, s)| {
                            let swatch = format!("background: {};", slice_color(i));
                            view! {
                                <li>
                                    <span class="swatch" style=swatch></span>
                                    <span>{s.label}</span>
                                    <span class="muted">
                                        {format!(" {} · {:.1}%", format_money(s.value), s.percentage)}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any()
    };

    view! {
        <>
            <style>
                "
                .chart{ display:flex; flex-wrap: wrap; gap: 24px; align-items:center; justify-content:center; }
                .pie{ width: 260px; height: 260px; border-radius: 50%; }
                .legend{ list-style: none; margin: 0; padding: 0; }
                .legend li{ display:flex; align-items:center; gap: 8px; margin-bottom: 8px; }
                .swatch{ width: 14px; height: 14px; border-radius: 4px; display:inline-block; }
                "
            </style>

            <div class="card">
                <h2 style="margin:0 0 14px 0; text-align:center;">"Expense breakdown"</h2>

                <Show when=move || loading.get() fallback=|| ()>
                    <p class="muted">"Loading..."</p>
                </Show>

                <Show when=move || error_msg.get().is_some() fallback=|| ()>
                    <div class="error">{move || error_msg.get().unwrap_or_default()}</div>
                </Show>

                <Show when=move || !loading.get() && error_msg.get().is_none() fallback=|| ()>
                    {chart}
                </Show>
            </div>
        </>
    }
}
