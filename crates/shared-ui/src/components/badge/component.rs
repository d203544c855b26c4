use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }

    /// Variant for a membership status string from the backend.
    pub fn for_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "active" | "approved" => BadgeVariant::Primary,
            "pending" | "review" => BadgeVariant::Secondary,
            "inactive" | "suspended" | "rejected" => BadgeVariant::Destructive,
            _ => BadgeVariant::Outline,
        }
    }
}

/// An inline label for statuses and tags.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        Badge { variant: BadgeVariant::for_status(&status), "{status}" }
    }
}
