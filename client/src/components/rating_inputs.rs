//! Form controls for scoring and grading candidates.
//!
//! DESIGN
//! ======
//! Controls only parse the DOM value back into the rating vocabulary and hand
//! it to a callback; they never touch page state directly.

use leptos::prelude::*;

use crate::state::rating::{Criterion, Grade, Safety, Score};

/// 10..1 select for one criterion of a diagnosis.
#[component]
pub fn ScoreSelect(
    criterion: Criterion,
    #[prop(into)] value: Signal<Score>,
    on_change: Callback<Score>,
) -> impl IntoView {
    view! {
        <label class="rating-field">
            <span class="rating-field__label">{criterion.label()}</span>
            <select
                class="rating-field__select"
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Some(score) = Score::parse(&event_target_value(&ev)) {
                        on_change.run(score);
                    }
                }
            >
                {Score::options()
                    .map(|s| view! { <option value=s.to_string()>{s.to_string()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Qualitative grade select for one criterion of a test.
#[component]
pub fn GradeSelect(
    criterion: Criterion,
    #[prop(into)] value: Signal<Grade>,
    on_change: Callback<Grade>,
) -> impl IntoView {
    view! {
        <label class="rating-field">
            <span class="rating-field__label">{criterion.label()}</span>
            <select
                class="rating-field__select"
                prop:value=move || value.get().label()
                on:change=move |ev| {
                    if let Some(grade) = Grade::from_label(&event_target_value(&ev)) {
                        on_change.run(grade);
                    }
                }
            >
                {Grade::ALL
                    .into_iter()
                    .map(|g| view! { <option value=g.label()>{g.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Radio group for the safety call on one test.
#[component]
pub fn SafetyRadios(
    /// Groups the radios so the browser keeps one checked.
    name: String,
    #[prop(into)] value: Signal<Safety>,
    on_change: Callback<Safety>,
) -> impl IntoView {
    view! {
        <fieldset class="safety-field">
            <legend class="safety-field__label">
                "Safety " <span class="safety-field__hint">"(Evaluates the suggested test safety.)"</span>
            </legend>
            {Safety::CHOICES
                .into_iter()
                .map(|choice| {
                    let name = name.clone();
                    view! {
                        <label class="safety-field__option">
                            <input
                                type="radio"
                                name=name
                                value=choice.label()
                                prop:checked=move || value.get() == choice
                                on:change=move |_| on_change.run(choice)
                            />
                            {choice.label()}
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
    }
}
