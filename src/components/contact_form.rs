use leptos::{ev::SubmitEvent, prelude::*};

use crate::analytics::DataLayer;
use crate::components::use_toasts;
use crate::models::{ContactSubmission, ProjectType};
use crate::server_fns::submit_lead;
use crate::validation::{Field, MESSAGE_MAX};
use crate::workflow::{LeadForm, SubmitBlocked, SubmitError};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());
    let toasts = use_toasts();

    let send = Action::new(move |snapshot: &ContactSubmission| {
        let snapshot = snapshot.clone();
        async move {
            let result = submit_lead(snapshot)
                .await
                .map_err(|e| SubmitError::Endpoint(e.to_string()));
            form.update(|f| {
                f.finish_submit(result, &toasts, &DataLayer);
            });
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(LeadForm::begin_submit) {
            Some(Ok(snapshot)) => {
                send.dispatch(snapshot);
            }
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                leptos::logging::log!("contact form not sent: {errors}");
            }
            _ => {}
        }
    };

    let value = move |field: Field| form.with(|f| f.value(field).to_string());
    let update = move |field: Field| {
        move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)))
    };
    let submitting = move || form.with(LeadForm::is_submitting);

    view! {
        <form class="contact-form" novalidate on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Full name"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Your name"
                    autocomplete="name"
                    prop:value=move || value(Field::Name)
                    on:input=update(Field::Name)
                />
                <FieldError form=form field=Field::Name/>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="you@company.com"
                        autocomplete="email"
                        prop:value=move || value(Field::Email)
                        on:input=update(Field::Email)
                    />
                    <FieldError form=form field=Field::Email/>
                </div>

                <div class="form-group">
                    <label for="phone">"Phone / WhatsApp"</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        placeholder="(00) 00000-0000"
                        autocomplete="tel"
                        inputmode="numeric"
                        maxlength="15"
                        prop:value=move || value(Field::Phone)
                        on:input=update(Field::Phone)
                    />
                    <FieldError form=form field=Field::Phone/>
                </div>
            </div>

            <div class="form-group">
                <label for="projectType">"Project type"</label>
                <select
                    id="projectType"
                    name="projectType"
                    class="select-input"
                    prop:value=move || value(Field::ProjectType)
                    on:change=update(Field::ProjectType)
                >
                    <option value="">"Select..."</option>
                    {ProjectType::all()
                        .into_iter()
                        .map(|kind| {
                            view! { <option value=kind.as_str()>{kind.label()}</option> }
                        })
                        .collect_view()}
                </select>
                <FieldError form=form field=Field::ProjectType/>
            </div>

            <Show when=move || form.with(|f| f.project_type() == Some(ProjectType::Other))>
                <div class="form-group">
                    <label for="otherProjectType">"Which kind of project?"</label>
                    <input
                        type="text"
                        id="otherProjectType"
                        name="otherProjectType"
                        placeholder="Describe the project type"
                        prop:value=move || value(Field::OtherProjectType)
                        on:input=update(Field::OtherProjectType)
                    />
                    <FieldError form=form field=Field::OtherProjectType/>
                </div>
            </Show>

            <div class="form-group">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Tell us about your project: location, size, timeline..."
                    prop:value=move || value(Field::Message)
                    on:input=update(Field::Message)
                ></textarea>
                <p class="hint">
                    {move || form.with(|f| f.value(Field::Message).chars().count())}
                    " / "
                    {MESSAGE_MAX}
                </p>
                <FieldError form=form field=Field::Message/>
            </div>

            <button type="submit" class="btn btn-primary" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Request a quote" }}
            </button>
        </form>
    }
}

#[component]
fn FieldError(form: RwSignal<LeadForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field)).map(|msg| {
            view! { <p class="error" id=format!("{field}-error")>{msg}</p> }
        })
    }
}
