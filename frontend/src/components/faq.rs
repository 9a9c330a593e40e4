use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}
