//! Differential-diagnosis step.
//!
//! SYSTEM CONTEXT
//! ==============
//! First wizard step. Owns a `DiagnosisState` for the lifetime of the route
//! and parks its handoff in the shared `WizardHandoff` when the clinician
//! presses "Next". Nothing is sent over the network from here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::rating_inputs::ScoreSelect;
use crate::components::wizard_progress::WizardProgress;
use crate::state::diagnosis::{CandidateId, DiagnosisAction, DiagnosisState};
use crate::state::rating::{Criterion, Score};
use crate::state::wizard::{WizardHandoff, WizardStep};

const ADD_DIALOG_HELP: &str = "The model generates diagnostic suggestions based on the given input data. However, these outputs may not encompass all clinically plausible hypotheses. To improve diagnostic coverage, users may manually insert additional candidate conditions supported by their clinical evaluation.";

#[component]
pub fn DiagnosisPage() -> impl IntoView {
    let handoff = expect_context::<RwSignal<WizardHandoff>>();
    let navigate = use_navigate();

    let state = RwSignal::new(DiagnosisState::seeded());
    let dispatch = Callback::new(move |action: DiagnosisAction| state.update(|s| s.apply(action)));

    let on_next = move |_| {
        let snapshot = state.with_untracked(DiagnosisState::handoff);
        handoff.update(|h| h.diagnoses = Some(snapshot));
        if let Some(next) = WizardStep::Diagnosis.next() {
            navigate(next.path(), NavigateOptions::default());
        }
    };

    view! {
        <div class="wizard-page">
            <WizardProgress current=WizardStep::Diagnosis/>
            <section class="wizard-card">
                <h2 class="wizard-card__title">{WizardStep::Diagnosis.title()}</h2>
                <div class="wizard-card__narrative">
                    <p>{move || state.with(|s| s.case_description.clone())}</p>
                </div>

                <button class="btn btn--outline" on:click=move |_| dispatch.run(DiagnosisAction::OpenAddDialog)>
                    "+ Add Diagnosis"
                </button>

                <div class="candidate-list">
                    <For
                        each=move || state.with(|s| s.candidates.iter().map(|c| (c.id, c.name.clone())).collect::<Vec<_>>())
                        key=|(id, _)| *id
                        children=move |(id, name)| view! { <DiagnosisCard id=id name=name state=state dispatch=dispatch/> }
                    />
                </div>

                <div class="wizard-card__actions">
                    <button class="btn btn--primary" on:click=on_next>
                        "Next"
                    </button>
                </div>
            </section>

            <Show when=move || state.with(|s| s.add_dialog.open)>
                <AddDiagnosisDialog state=state dispatch=dispatch/>
            </Show>
        </div>
    }
}

/// One candidate row with its collapsible rating panel.
#[component]
fn DiagnosisCard(
    id: CandidateId,
    name: String,
    state: RwSignal<DiagnosisState>,
    dispatch: Callback<DiagnosisAction>,
) -> impl IntoView {
    let expanded = move || state.with(|s| s.is_expanded(id));
    let selected = move || state.with(|s| s.candidate(id).is_some_and(|c| c.selected));
    let score_of = move |criterion: Criterion| {
        Signal::derive(move || {
            state.with(|s| s.candidate(id).map(|c| c.scores.get(criterion)).unwrap_or_default())
        })
    };
    let comment = move || state.with(|s| s.candidate(id).map(|c| c.comment.clone()).unwrap_or_default());

    view! {
        <article class="candidate">
            <header
                class="candidate__header"
                on:click=move |_| dispatch.run(DiagnosisAction::ToggleExpansion(id))
            >
                <input
                    type="checkbox"
                    id=format!("diagnosis-{id}")
                    prop:checked=selected
                    on:click=move |ev| ev.stop_propagation()
                    on:change=move |_| dispatch.run(DiagnosisAction::ToggleSelection(id))
                />
                <span class="candidate__name">{name}</span>
            </header>
            <Show when=expanded>
                <div class="candidate__body">
                    <p class="candidate__prompt">"Please, rate the suggested diagnosis below:"</p>
                    <div class="rating-grid">
                        {Criterion::ALL
                            .into_iter()
                            .map(|criterion| {
                                let on_change = Callback::new(move |score: Score| {
                                    dispatch.run(DiagnosisAction::SetScore { id, criterion, score });
                                });
                                view! { <ScoreSelect criterion=criterion value=score_of(criterion) on_change=on_change/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <label class="candidate__comment">
                        <span class="rating-field__label">"Comments"</span>
                        <textarea
                            rows="4"
                            placeholder="Add any observations about the suggested diagnosis"
                            prop:value=comment
                            on:input=move |ev| {
                                dispatch.run(DiagnosisAction::SetComment { id, text: event_target_value(&ev) });
                            }
                        ></textarea>
                    </label>
                </div>
            </Show>
        </article>
    }
}

#[component]
fn AddDiagnosisDialog(state: RwSignal<DiagnosisState>, dispatch: Callback<DiagnosisAction>) -> impl IntoView {
    let close = move |_| dispatch.run(DiagnosisAction::CloseAddDialog);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Add Diagnosis"</h2>
                    <button class="btn btn--link" on:click=close title="Close">
                        "✕"
                    </button>
                </div>
                <p class="dialog__help">{ADD_DIALOG_HELP}</p>
                <label class="dialog__label">
                    "Diagnosis"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter diagnosis name"
                        autofocus
                        prop:value=move || state.with(|s| s.add_dialog.draft.clone())
                        on:input=move |ev| dispatch.run(DiagnosisAction::EditDraft(event_target_value(&ev)))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                dispatch.run(DiagnosisAction::SubmitDraft);
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=close>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--success"
                        disabled=move || !state.with(|s| s.add_dialog.can_submit())
                        on:click=move |_| dispatch.run(DiagnosisAction::SubmitDraft)
                    >
                        "Add Diagnosis"
                    </button>
                </div>
            </div>
        </div>
    }
}
