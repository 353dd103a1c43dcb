use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{fetch_transactions, transactions_url};
use crate::model::{format_amount, format_date_time, group_by_day, time_of, type_label, Transaction};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal::<Option<String>>(None);
    let (items, set_items) = signal::<Vec<Transaction>>(vec![]);
    let selected = RwSignal::new(None::<Transaction>);

    spawn_local(async move {
        match fetch_transactions().await {
            Ok(list) => set_items.set(list),
            Err(e) => {
                set_error_msg.set(Some(e));
                set_items.set(vec![]);
            }
        }
        set_loading.set(false);
    });

    let is_empty = move || !loading.get() && error_msg.get().is_none() && items.get().is_empty();

    view! {
        <>
            <style>
                "
                .day{ margin-top: 14px; }
                .day-header{
                  margin: 0 0 8px 0; font-size: 14px; color: var(--muted);
                  border-bottom: 1px solid var(--border); padding-bottom: 4px;
                }
                .tx-row{
                  display:flex; align-items:center; justify-content:space-between; gap: 10px;
                  padding: 12px; margin-bottom: 8px; border-radius: 12px;
                  border: 1px solid var(--border); cursor: pointer;
                }
                .tx-row:hover{ background: var(--soft); }
                .tx-title{ font-weight: 600; }
                .tx-meta{ font-size: 12px; }
                .amount{ font-weight: 700; white-space: nowrap; }
                .amount.negative{ color: #dc2626; }
                .amount.positive{ color: #16a34a; }
                .modal-backdrop{
                  position: fixed; inset: 0; z-index: 80;
                  background: rgba(0,0,0,0.3); backdrop-filter: blur(4px);
                  display:flex; align-items:center; justify-content:center; padding: 16px;
                }
                .modal{ width: 100%; max-width: 420px; max-height: 90vh; overflow: auto; }
                .field{ margin-bottom: 10px; }
                .field p{ margin: 0; }
                pre{ white-space: pre-wrap; margin: 0; }
                "
            </style>

            <div class="card">
                <h2 style="margin:0 0 10px 0;">"Transactions"</h2>
                <p class="muted" style="margin:0;">
                    "GET " <code>{transactions_url()}</code>
                </p>

                <Show when=move || loading.get() fallback=|| ()>
                    <p class="muted">"Loading..."</p>
                </Show>

                <Show when=move || error_msg.get().is_some() fallback=|| ()>
                    <div class="error" style="margin-top:12px;">
                        {move || error_msg.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show when=is_empty fallback=|| ()>
                    <p class="muted">"No transactions found."</p>
                </Show>

                <For
                    each=move || group_by_day(&items.get())
                    key=|group| group.day.clone()
                    children=move |group| {
                        view! {
                            <div class="day">
                                <h3 class="day-header">{group.day}</h3>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|t| view! { <TransactionRow transaction=t selected=selected /> })
                                    .collect_view()}
                            </div>
                        }
                    }
                />
            </div>

            <TransactionModal selected=selected />
        </>
    }
}

#[component]
fn TransactionRow(transaction: Transaction, selected: RwSignal<Option<Transaction>>) -> impl IntoView {
    let amount_class = if transaction.is_expense() { "amount negative" } else { "amount positive" };
    let amount = format_amount(transaction.sum);
    let time = time_of(&transaction.date).to_string();
    let label = type_label(&transaction.transaction_type);
    let id = transaction.id_text();
    let description = transaction.description.clone();

    view! {
        <div class="tx-row" on:click=move |_| selected.set(Some(transaction.clone()))>
            <div>
                <div class="tx-title">{description}</div>
                <div class="muted tx-meta">{time}" · "{label}" · ID: "{id}</div>
            </div>
            <div class=amount_class>{amount}</div>
        </div>
    }
}

#[component]
fn TransactionModal(selected: RwSignal<Option<Transaction>>) -> impl IntoView {
    let close = move |_: leptos::ev::MouseEvent| selected.set(None);

    let body = move || {
        selected.get().map(|t| {
            let amount_class = if t.is_expense() { "amount negative" } else { "amount positive" };
            let details = t
                .details
                .as_ref()
                .and_then(|d| serde_json::to_string_pretty(d).ok());

            view! {
                <div class="row" style="align-items:center; justify-content:space-between; margin-bottom:12px;">
                    <strong>{type_label(&t.transaction_type)}</strong>
                    <span class=amount_class>{format_amount(t.sum)}</span>
                </div>
                <div class="field">
                    <p class="muted">"Description"</p>
                    <p>{t.description.clone()}</p>
                </div>
                <div class="field">
                    <p class="muted">"Transaction ID"</p>
                    <p>{t.id_text()}</p>
                </div>
                <div class="field">
                    <p class="muted">"Date and time"</p>
                    <p>{format_date_time(&t.date)}</p>
                </div>
                {details.map(|d| view! {
                    <div class="field">
                        <p class="muted">"Details"</p>
                        <pre>{d}</pre>
                    </div>
                })}
            }
        })
    };

    view! {
        <Show when=move || selected.with(Option::is_some) fallback=|| ()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal card" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    <h3 style="margin:0 0 12px 0;">"Transaction details"</h3>
                    {body}
                    <div class="row" style="justify-content:flex-end;">
                        <button class="btn" type="button" on:click=close>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
