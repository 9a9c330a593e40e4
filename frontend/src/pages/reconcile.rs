use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::reconcile::{create_reconcile, ReconcileError, ReconcileForm, ReconcileType};
use crate::session;
use crate::Route;

const GENERIC_FAILURE: &str = "Could not start the reconciliation. Please try again.";

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(ReconcileCreate)]
pub fn reconcile_create() -> Html {
    let form = use_state(|| ReconcileForm {
        reconcile_type: ReconcileType::Bank.as_str().to_string(),
        ..Default::default()
    });
    let is_submitting = use_state(|| false);
    let navigator = use_navigator();

    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ReconcileForm {
                reconcile_type: select.value(),
                ..(*form).clone()
            });
        })
    };

    let on_start = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ReconcileForm {
                period_start: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_end = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ReconcileForm {
                period_end: input.value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    log!("Reconcile form invalid:", err.to_string());
                    alert(GENERIC_FAILURE);
                    return;
                }
            };
            let Some(token) = session::stored_token() else {
                log!("Reconcile submit without token:", ReconcileError::MissingToken.to_string());
                alert(GENERIC_FAILURE);
                return;
            };

            is_submitting.set(true);
            let is_submitting = is_submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match create_reconcile(&request, &token).await {
                    Ok(()) => {
                        log!("Reconciliation created");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::ReconcileList);
                        }
                    }
                    Err(err) => {
                        gloo_console::error!("Reconcile request failed:", err.to_string());
                        alert(GENERIC_FAILURE);
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="reconcile-page">
            <form class="reconcile-form" onsubmit={onsubmit}>
                <h1>{"New reconciliation"}</h1>

                <label for="reconcile-type">{"Type"}</label>
                <select id="reconcile-type" onchange={on_type}>
                    { for ReconcileType::ALL.iter().map(|kind| html! {
                        <option
                            value={kind.as_str()}
                            selected={form.reconcile_type == kind.as_str()}
                        >
                            {kind.label()}
                        </option>
                    }) }
                </select>

                <label for="period-start">{"Period start"}</label>
                <input
                    id="period-start"
                    type="date"
                    value={form.period_start.clone()}
                    onchange={on_start}
                    required={true}
                />

                <label for="period-end">{"Period end"}</label>
                <input
                    id="period-end"
                    type="date"
                    value={form.period_end.clone()}
                    onchange={on_end}
                    required={true}
                />

                <button type="submit" class="cta-button" disabled={*is_submitting}>
                    { if *is_submitting { "Starting..." } else { "Start reconciliation" } }
                </button>
            </form>
            <style>{RECONCILE_STYLE}</style>
        </div>
    }
}

#[function_component(ReconcileList)]
pub fn reconcile_list() -> Html {
    html! {
        <div class="reconcile-page">
            <div class="reconcile-form">
                <h1>{"Reconciliations"}</h1>
                <p>{"Your reconciliation has been queued. Matched entries appear in the dashboard as soon as they are processed."}</p>
                <Link<Route> to={Route::ReconcileCreate} classes="cta-button">
                    {"Start another"}
                </Link<Route>>
            </div>
            <style>{RECONCILE_STYLE}</style>
        </div>
    }
}

const RECONCILE_STYLE: &str = r#"
.reconcile-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    background: #0f172a;
}
.reconcile-form {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    width: 100%;
    max-width: 480px;
    padding: 3rem;
    border-radius: 16px;
    background: rgba(30, 41, 59, 0.8);
    border: 1px solid rgba(34, 197, 94, 0.15);
    color: #e2e8f0;
}
.reconcile-form h1 {
    margin-bottom: 1rem;
    text-align: center;
}
.reconcile-form select,
.reconcile-form input {
    padding: 0.75rem;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.15);
    background: rgba(15, 23, 42, 0.8);
    color: #fff;
}
.reconcile-form button:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
"#;
