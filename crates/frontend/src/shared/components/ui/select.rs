use leptos::prelude::*;

/// Dropdown bound to a string value
#[component]
pub fn Select(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// `(value, label)` pairs, in display order
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            class=move || format!("form__select {}", additional_class())
            prop:value=move || value.get()
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            <For
                each=move || options.get()
                key=|(code, _)| code.clone()
                children=move |(code, label)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
