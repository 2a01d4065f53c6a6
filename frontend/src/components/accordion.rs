use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub question: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("accordion-item", is_open.then_some("open"))}>
            <button class="accordion-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="accordion-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}
