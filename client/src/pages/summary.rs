//! Read-only evaluation summary.
//!
//! Projects whatever the diagnosis step handed over; falls back to the fixed
//! recap when the route is opened directly.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::wizard_progress::WizardProgress;
use crate::state::rating::Criterion;
use crate::state::summary::{SummaryRow, SummaryState, cell, row_tone};
use crate::state::wizard::{HOME_PATH, WizardHandoff, WizardStep};

#[component]
pub fn SummaryPage() -> impl IntoView {
    let handoff = expect_context::<RwSignal<WizardHandoff>>();
    let navigate = use_navigate();

    let summary = handoff.with_untracked(|h| match &h.diagnoses {
        Some(diagnoses) => SummaryState::from_handoff(diagnoses, h.receipt.clone()),
        None => SummaryState::seeded(),
    });
    let receipt_id = receipt_reference(&summary);

    let navigate_back = navigate.clone();
    let on_back = move |_| {
        if let Some(prev) = WizardStep::Summary.previous() {
            navigate_back(prev.path(), NavigateOptions::default());
        }
    };
    let on_finish = move |_| {
        handoff.update(WizardHandoff::reset);
        navigate(HOME_PATH, NavigateOptions::default());
    };

    let rows = summary
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| summary_row(index, row))
        .collect::<Vec<_>>();

    view! {
        <div class="wizard-page">
            <WizardProgress current=WizardStep::Summary/>
            <section class="wizard-card">
                <h2 class="wizard-card__title">{WizardStep::Summary.title()}</h2>
                <div class="wizard-card__narrative">
                    <p>{summary.narrative}</p>
                </div>
                {receipt_id.map(|id| view! { <p class="wizard-card__receipt">"Submission reference: " {id}</p> })}
                <table class="summary-table">
                    <thead>
                        <tr>
                            <th>"Diagnosis"</th>
                            {Criterion::ALL.into_iter().map(|c| view! { <th>{c.label()}</th> }).collect::<Vec<_>>()}
                            <th>"Comments"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <div class="wizard-card__actions wizard-card__actions--split">
                    <button class="btn btn--outline" on:click=on_back>
                        "← Back"
                    </button>
                    <button class="btn btn--primary" on:click=on_finish>
                        "Finish"
                    </button>
                </div>
            </section>
        </div>
    }
}

/// Server-issued id of the submission, when the receipt carries one.
fn receipt_reference(summary: &SummaryState) -> Option<String> {
    summary
        .receipt
        .as_ref()
        .and_then(|r| r.get("id"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Score cells in criterion order followed by the comment cell.
fn row_cells(row: &SummaryRow) -> Vec<String> {
    Criterion::ALL
        .into_iter()
        .map(|c| cell(row.score(c)))
        .chain(std::iter::once(cell(row.comment.as_deref())))
        .collect()
}

fn summary_row(index: usize, row: SummaryRow) -> impl IntoView {
    let class = row_tone(index, row.selected).class();
    let mut cells = row_cells(&row);
    let comment = cells.pop().unwrap_or_default();
    let scores = cells
        .into_iter()
        .map(|value| view! { <td class="summary-table__score">{value}</td> })
        .collect::<Vec<_>>();
    view! {
        <tr class=class>
            <td>{row.name}</td>
            {scores}
            <td>{comment}</td>
        </tr>
    }
}
