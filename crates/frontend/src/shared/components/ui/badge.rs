use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || variant_modifier(variant.get().as_deref().unwrap_or("neutral"));

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

fn variant_modifier(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge variant for a lifecycle status of any resource.
pub fn status_variant(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "warning",
        "completed" | "delivered" | "over" => "success",
        "cancelled" => "error",
        "scheduled" => "primary",
        _ => "neutral",
    }
}

/// Status label coloured by [`status_variant`].
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    view! {
        <span class=move || {
            format!("badge badge--status {}", variant_modifier(status_variant(&status.get())))
        }>
            {move || status.get()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_variants() {
        assert_eq!(status_variant("Pending"), "warning");
        assert_eq!(status_variant("pending"), "warning");
        assert_eq!(status_variant("Delivered"), "success");
        assert_eq!(status_variant("Cancelled"), "error");
        assert_eq!(status_variant("Scheduled"), "primary");
        assert_eq!(status_variant("whatever"), "neutral");
    }
}
