//! Patient dashboard with summary counters and a paginated patient table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Renders the mock list immediately, then swaps in the
//! server's list once it answers. Counters come from the server too and are
//! recomputed locally when that request fails.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::pager::Pager;
use crate::net::types::{DashboardStats, PatientRecord};
use crate::state::patients::{DashboardAction, DashboardState, view_patient_notice};

/// Rows requested from the server; paging itself happens locally.
#[cfg(feature = "hydrate")]
const FETCH_LIMIT: usize = 50;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let state = RwSignal::new(DashboardState::default());
    let stats = RwSignal::new(None::<DashboardStats>);
    let dispatch = Callback::new(move |action: DashboardAction| state.update(|s| s.apply(action)));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_patients(0, FETCH_LIMIT).await {
                Some(records) => dispatch.run(DashboardAction::ReplaceRecords(records)),
                None => log::warn!("patient list unavailable, showing sample records"),
            }
            let counters = match crate::net::api::fetch_dashboard_stats().await {
                Some(counters) => counters,
                None => {
                    let now = crate::net::api::now_iso8601();
                    let month = now.get(..7).unwrap_or_default();
                    state.with_untracked(|s| crate::state::patients::compute_stats(&s.records, month))
                }
            };
            stats.set(Some(counters));
        });
    }

    let on_add = move |_| {
        let route = state.with_untracked(DashboardState::add_patient_route);
        navigate(route, NavigateOptions::default());
    };

    let counter = move |pick: fn(&DashboardStats) -> usize| {
        move || stats.get().map_or_else(|| "–".to_owned(), |s| pick(&s).to_string())
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Patient Dashboard"</h1>
                <button class="btn btn--primary" on:click=on_add>
                    "+ Add Patient"
                </button>
            </header>

            <div class="dashboard-page__stats">
                <StatCard label="Total Patients" value=Signal::derive(counter(|s| s.total_patients))/>
                <StatCard label="Active Records" value=Signal::derive(counter(|s| s.active_records))/>
                <StatCard label="This Month" value=Signal::derive(counter(|s| s.this_month))/>
            </div>

            <Show
                when=move || state.with(DashboardState::has_patients)
                fallback=|| view! { <p class="dashboard-page__empty">"No patients yet."</p> }
            >
                <table class="patient-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Age"</th>
                            <th>"Gender"</th>
                            <th>"Status"</th>
                            <th>"Last Visit"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state.with(|s| {
                                let first = s.first_row_number();
                                s.current_page()
                                    .iter()
                                    .enumerate()
                                    .map(|(offset, record)| patient_row(first + offset, record.clone()))
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </tbody>
                </table>
            </Show>

            <Pager
                page_count=Signal::derive(move || state.with(DashboardState::page_count))
                current=Signal::derive(move || state.with(|s| s.page_index))
                on_select=Callback::new(move |page| dispatch.run(DashboardAction::Paginate(page)))
            />
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
        </div>
    }
}

fn patient_row(number: usize, record: PatientRecord) -> impl IntoView {
    let badge = format!("badge badge--{}", record.status.badge_tone());
    let notice = view_patient_notice(&record);
    let on_view = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&notice);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &notice;
        }
    };
    view! {
        <tr>
            <td>{number}</td>
            <td>{record.name}</td>
            <td>{record.age}</td>
            <td>{record.gender}</td>
            <td>
                <span class=badge>{record.status.label()}</span>
            </td>
            <td>{record.last_visit}</td>
            <td>
                <button class="btn btn--link" on:click=on_view>
                    "View"
                </button>
            </td>
        </tr>
    }
}
