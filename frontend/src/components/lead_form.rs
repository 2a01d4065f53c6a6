use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::leads::form::{LeadForm, StatusKind, SubmitRejected};
use crate::leads::lead::Field;
use crate::leads::sink::{LeadSink, SinkError, SupabaseSink};

pub enum LeadFormMsg {
    SetField(Field, String),
    Submit,
    Submitted(Result<(), SinkError>),
}

/// Quick-inquiry card in the contact section.
pub struct LeadFormWidget {
    form: LeadForm,
    sink: SupabaseSink,
}

impl Component for LeadFormWidget {
    type Message = LeadFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LeadForm::new(),
            sink: SupabaseSink::from_env(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            LeadFormMsg::Submit => match self.form.begin_submit() {
                Ok(Some(lead)) => {
                    let insert = self.sink.insert(lead);
                    ctx.link().send_future(async move { LeadFormMsg::Submitted(insert.await) });
                    true
                }
                Ok(None) => true,
                Err(SubmitRejected::InFlight) => {
                    log::debug!("Ignoring submit while an inquiry is in flight");
                    false
                }
            },
            LeadFormMsg::Submitted(result) => {
                if result.is_ok() {
                    log::info!("Inquiry submitted");
                }
                self.form.complete(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                LeadFormMsg::SetField(field, input.value())
            })
        };
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            LeadFormMsg::SetField(Field::Message, area.value())
        });

        let fields = self.form.fields();
        let submitting = self.form.is_submitting();
        let status = self.form.status();
        let status_class = match status.kind {
            StatusKind::Success => "form-status success",
            _ => "form-status error",
        };

        html! {
            <div class="card lead-form">
                <div class="lead-form-title">{"Quick inquiry"}</div>
                <p class="lead-form-hint">{"Leave your details and we’ll reach out."}</p>

                <div class="lead-form-fields">
                    <input
                        class="field"
                        placeholder="Your name"
                        value={fields.name.clone()}
                        oninput={input(Field::Name)}
                    />
                    <input
                        class="field"
                        placeholder="Company / Organization"
                        value={fields.company.clone()}
                        oninput={input(Field::Company)}
                    />
                    <input
                        class="field"
                        placeholder="Phone / Email"
                        value={fields.contact.clone()}
                        oninput={input(Field::Contact)}
                    />
                    <textarea
                        class="field"
                        rows="4"
                        placeholder="What do you want to build? (ticketing system, dashboards, approvals...)"
                        value={fields.message.clone()}
                        oninput={on_message}
                    />

                    if status.is_visible() {
                        <div class={status_class} role="status">{&status.message}</div>
                    }

                    <button
                        type="button"
                        class="button-primary"
                        disabled={submitting}
                        onclick={link.callback(|_| LeadFormMsg::Submit)}
                    >
                        { if submitting { "Submitting..." } else { "Submit" } }
                    </button>
                </div>
            </div>
        }
    }
}
