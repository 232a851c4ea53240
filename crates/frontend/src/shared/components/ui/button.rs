use leptos::prelude::*;

fn button_class(variant: Option<&str>, size: Option<&str>, extra: Option<&str>) -> String {
    let mut class = String::from(match variant {
        Some("secondary") => "button button--secondary",
        Some("outline") => "button button--outline",
        _ => "button button--primary",
    });
    if size == Some("xs") {
        class.push_str(" button--xs");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Panel button: `primary` unless `variant` says `secondary`/`outline`
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// `xs` for the compact filter bar
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `type` attribute; plain `button` unless it submits a form
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=move || {
                button_class(
                    variant.get().as_deref(),
                    size.get().as_deref(),
                    class.get().as_deref(),
                )
            }
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
