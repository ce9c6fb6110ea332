//! Glass surfaces and small labelled building blocks.
//!
//! Frosted glass cards, pill badges, and section titles - the visual
//! vocabulary every page is composed from.

use dioxus::prelude::*;

use crate::components::icons::{icon, Icon};

/// Frosted glass card container
#[derive(Clone, PartialEq, Props)]
pub struct GlassCardProps {
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn GlassCard(props: GlassCardProps) -> Element {
    let extra = props.class.as_deref().unwrap_or("");
    rsx! {
        div { class: "glass-card {extra}", {props.children} }
    }
}

/// Small pill badge with a leading icon
#[component]
pub fn Pill(icon_kind: Icon, label: String) -> Element {
    rsx! {
        div { class: "pill",
            {icon(icon_kind, 14)}
            span { "{label}" }
        }
    }
}

/// Section title block: kicker line, heading, optional subtitle
#[derive(Clone, PartialEq, Props)]
pub struct SectionTitleProps {
    pub kicker: String,
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    pub icon_kind: Icon,
}

#[component]
pub fn SectionTitle(props: SectionTitleProps) -> Element {
    rsx! {
        div { class: "section-title fade-in-up",
            div { class: "section-title-row",
                div { class: "section-icon", {icon(props.icon_kind, 20)} }
                div {
                    div { class: "section-kicker", "{props.kicker}" }
                    div { class: "section-heading", "{props.title}" }
                }
            }
            if let Some(subtitle) = props.subtitle {
                div { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Compact icon + title + caption card used on the intro grid
#[component]
pub fn StatCard(icon_kind: Icon, title: String, caption: String) -> Element {
    rsx! {
        GlassCard {
            div { class: "stat-card",
                div { class: "section-icon", {icon(icon_kind, 20)} }
                div {
                    div { class: "stat-title", "{title}" }
                    div { class: "stat-caption", "{caption}" }
                }
            }
        }
    }
}
