use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{hooks::{use_location, use_navigate}, path, NavigateOptions};

use crate::page::chart::ChartPage;
use crate::page::transactions::TransactionsPage;

const THEME_KEY: &str = "theme";

fn stored_dark_mode() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .is_some_and(|v| v == "dark")
}

fn store_dark_mode(dark: bool) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if let Err(e) = storage.set_item(THEME_KEY, if dark { "dark" } else { "light" }) {
        leptos::logging::warn!("could not persist theme: {e:?}");
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppShell />
        </Router>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let loc = use_location();
    let nav = use_navigate();
    let dark = RwSignal::new(stored_dark_mode());

    let is_list = move || loc.pathname.get() == "/";
    let is_chart = move || loc.pathname.get() == "/chart";

    let go = move |to: &'static str| {
        let nav = nav.clone();
        move |_| nav(to, NavigateOptions::default())
    };

    view! {
        <div class=move || if dark.get() { "theme dark" } else { "theme" }>
            <style>
                "
                .theme{
                  --bg:#ffffff;
                  --text:#0f172a;
                  --muted:#64748b;
                  --border:#e2e8f0;
                  --soft:#f1f5f9;
                  --card:rgba(255,255,255,0.9);
                  --active:#111827;
                  min-height: 100vh;
                  background: var(--bg);
                  color: var(--text);
                }
                .theme.dark{
                  --bg:#1f2937;
                  --text:#f1f5f9;
                  --muted:#9ca3af;
                  --border:#374151;
                  --soft:#111827;
                  --card:#374151;
                  --active:#f9fafb;
                }
                .appbar{
                  position: sticky; top: 0; z-index: 50;
                  background: var(--bg);
                  border-bottom: 1px solid var(--border);
                }
                .appbar-inner{
                  max-width: 720px; margin: 0 auto; padding: 12px 16px;
                  display:flex; align-items:center; justify-content:space-between; gap: 12px;
                }
                .brand{
                  display:flex; align-items:center; gap: 10px;
                  font-weight: 700; font-size: 20px; cursor: pointer;
                }
                .nav{
                  display:flex; align-items:center; gap: 8px; padding: 6px;
                  border: 1px solid var(--border); background: var(--soft);
                  border-radius: 14px;
                }
                .nav-btn{
                  border: 0; background: transparent; color: var(--muted);
                  font-weight: 600; padding: 8px 12px; border-radius: 12px;
                  cursor: pointer;
                }
                .nav-btn:hover{ color: var(--text); }
                .nav-btn.active{ background: var(--bg); color: var(--active); }
                .container{ max-width: 720px; margin: 0 auto; padding: 18px 16px; }
                .card{
                  border: 1px solid var(--border);
                  border-radius: 16px;
                  background: var(--card);
                  box-shadow: 0 12px 30px rgba(15,23,42,0.06);
                  padding: 14px;
                }
                .row{ display:flex; gap: 10px; flex-wrap: wrap; }
                .btn{
                  border: 1px solid var(--border);
                  border-radius: 12px;
                  padding: 8px 14px;
                  cursor: pointer;
                  background: var(--bg);
                  color: var(--text);
                  font-weight: 700;
                }
                .muted{ color: var(--muted); }
                .error{
                  border: 1px solid #fecaca;
                  background: #fff1f2;
                  color: #9f1239;
                  padding: 10px 12px;
                  border-radius: 12px;
                }
                .settings{ position: relative; }
                .settings-panel{
                  position: absolute; right: 0; margin-top: 8px; width: 220px; z-index: 60;
                }
                .settings-title{
                  font-weight: 700; padding-bottom: 8px; margin-bottom: 8px;
                  border-bottom: 1px solid var(--border);
                }
                "
            </style>

            <header class="appbar">
                <div class="appbar-inner">
                    <div class="brand" role="link" tabindex="0" on:click=go("/")>
                        <span>"Payments"</span>
                    </div>

                    <nav class="nav" aria-label="Primary">
                        <button
                            type="button"
                            class=move || if is_list() { "nav-btn active" } else { "nav-btn" }
                            on:click=go("/")
                        >
                            "Transactions"
                        </button>

                        <button
                            type="button"
                            class=move || if is_chart() { "nav-btn active" } else { "nav-btn" }
                            on:click=go("/chart")
                        >
                            "Chart"
                        </button>
                    </nav>

                    <Settings dark=dark />
                </div>
            </header>

            <main class="container">
                <Routes fallback=|| view! { <p>"404 - Not Found"</p> }>
                    <Route path=path!() view=TransactionsPage />
                    <Route path=path!("chart") view=ChartPage />
                </Routes>
            </main>
        </div>
    }
}

#[component]
fn Settings(dark: RwSignal<bool>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="settings">
            <button
                type="button"
                class="nav-btn"
                aria-label="Settings"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "⚙"
            </button>

            <Show when=move || open.get() fallback=|| ()>
                <div class="settings-panel card">
                    <div class="settings-title">"Settings"</div>
                    <div class="row" style="align-items:center; justify-content:space-between;">
                        <span>"Theme"</span>
                        <ThemeToggle dark=dark />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ThemeToggle(dark: RwSignal<bool>) -> impl IntoView {
    let toggle = move |_: leptos::ev::MouseEvent| {
        dark.update(|d| *d = !*d);
        store_dark_mode(dark.get_untracked());
    };

    view! {
        <button type="button" class="btn" on:click=toggle>
            {move || if dark.get() { "🌕" } else { "☀️" }}
        </button>
    }
}
