use contracts::domain::orders::OrderStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Modifier class for an order status dot
pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge--status-pending",
        OrderStatus::Canceled => "badge--status-canceled",
        OrderStatus::Processing => "badge--status-processing",
        OrderStatus::Delivering => "badge--status-delivering",
        OrderStatus::Delivered => "badge--status-delivered",
    }
}

/// Order status: colored dot plus the localized label
#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", status_class(status))>
            <span class="badge__dot"></span>
            {status.display_name()}
        </span>
    }
}
