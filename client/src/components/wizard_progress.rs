//! Step indicator shown at the top of each wizard page.

use leptos::prelude::*;

use crate::state::wizard::WizardStep;

#[component]
pub fn WizardProgress(current: WizardStep) -> impl IntoView {
    let total = WizardStep::ALL.len();
    view! {
        <ol class="wizard-progress" aria-label="Progress">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    let class = if step == current {
                        "wizard-progress__step wizard-progress__step--current"
                    } else if step.ordinal() < current.ordinal() {
                        "wizard-progress__step wizard-progress__step--done"
                    } else {
                        "wizard-progress__step"
                    };
                    view! { <li class=class>{step.title()}</li> }
                })
                .collect::<Vec<_>>()}
        </ol>
        <p class="wizard-progress__caption">{format!("Step {} of {total}", current.ordinal())}</p>
    }
}
