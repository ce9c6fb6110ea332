//! Inline Lucide icons used across the card.

use dioxus::prelude::*;
use lovenote_core::ChipIcon;

/// The icons the card uses
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Heart,
    Sparkles,
    KeyRound,
    BadgeCheck,
    Quote,
    PartyPopper,
    Music,
    Play,
    ArrowRight,
    Coffee,
    Book,
    Film,
    Wand,
    Globe,
    MapPin,
    Timer,
    Gift,
    Star,
}

impl From<ChipIcon> for Icon {
    fn from(chip: ChipIcon) -> Self {
        match chip {
            ChipIcon::Coffee => Icon::Coffee,
            ChipIcon::Sparkles => Icon::Sparkles,
            ChipIcon::Book => Icon::Book,
            ChipIcon::Film => Icon::Film,
            ChipIcon::Music => Icon::Music,
            ChipIcon::Wand => Icon::Wand,
        }
    }
}

/// Render a Lucide icon at the given pixel size
pub fn icon(kind: Icon, size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(kind)}
        }
    }
}

fn icon_paths(kind: Icon) -> Element {
    match kind {
        Icon::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        Icon::Sparkles => rsx! {
            path { d: "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z" }
            path { d: "M5 3v4" }
            path { d: "M19 17v4" }
            path { d: "M3 5h4" }
            path { d: "M17 19h4" }
        },
        Icon::KeyRound => rsx! {
            path { d: "M2.586 17.414A2 2 0 0 0 2 18.828V21a1 1 0 0 0 1 1h3a1 1 0 0 0 1-1v-1a1 1 0 0 1 1-1h1a1 1 0 0 0 1-1v-1a1 1 0 0 1 1-1h.172a2 2 0 0 0 1.414-.586l.814-.814a6.5 6.5 0 1 0-4-4z" }
            circle { cx: "16.5", cy: "7.5", r: ".5", fill: "currentColor" }
        },
        Icon::BadgeCheck => rsx! {
            path { d: "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z" }
            path { d: "m9 12 2 2 4-4" }
        },
        Icon::Quote => rsx! {
            path { d: "M16 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z" }
            path { d: "M5 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z" }
        },
        Icon::PartyPopper => rsx! {
            path { d: "M5.8 11.3 2 22l10.7-3.79" }
            path { d: "M4 3h.01" }
            path { d: "M22 8h.01" }
            path { d: "M15 2h.01" }
            path { d: "M22 20h.01" }
            path { d: "m22 2-2.24.75a2.9 2.9 0 0 0-1.96 3.12c.1.86-.57 1.63-1.45 1.63h-.38c-.86 0-1.6.6-1.76 1.44L14 10" }
            path { d: "M11 13c1.93 1.93 2.83 4.17 2 5-.83.83-3.07-.07-5-2-1.93-1.93-2.83-4.17-2-5 .83-.83 3.07.07 5 2Z" }
        },
        Icon::Music => rsx! {
            circle { cx: "8", cy: "18", r: "4" }
            path { d: "M12 18V2l7 4" }
        },
        Icon::Play => rsx! {
            polygon { points: "6 3 20 12 6 21 6 3" }
        },
        Icon::ArrowRight => rsx! {
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        },
        Icon::Coffee => rsx! {
            path { d: "M10 2v2" }
            path { d: "M14 2v2" }
            path { d: "M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1" }
            path { d: "M6 2v2" }
        },
        Icon::Book => rsx! {
            path { d: "M12 7v14" }
            path { d: "M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z" }
        },
        Icon::Film => rsx! {
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
            path { d: "M7 3v18" }
            path { d: "M17 3v18" }
            path { d: "M3 7.5h4" }
            path { d: "M3 12h18" }
            path { d: "M3 16.5h4" }
            path { d: "M17 7.5h4" }
            path { d: "M17 16.5h4" }
        },
        Icon::Wand => rsx! {
            path { d: "m21.64 3.64-1.28-1.28a1.21 1.21 0 0 0-1.72 0L2.36 18.64a1.21 1.21 0 0 0 0 1.72l1.28 1.28a1.2 1.2 0 0 0 1.72 0L21.64 5.36a1.2 1.2 0 0 0 0-1.72" }
            path { d: "m14 7 3 3" }
            path { d: "M5 6v4" }
            path { d: "M19 14v4" }
            path { d: "M10 2v2" }
            path { d: "M7 8H3" }
            path { d: "M21 16h-4" }
            path { d: "M11 3H9" }
        },
        Icon::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        Icon::MapPin => rsx! {
            path { d: "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        Icon::Timer => rsx! {
            path { d: "M10 2h4" }
            path { d: "M12 14v-4" }
            circle { cx: "12", cy: "14", r: "8" }
        },
        Icon::Gift => rsx! {
            rect { x: "3", y: "8", width: "18", height: "4", rx: "1" }
            path { d: "M12 8v13" }
            path { d: "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" }
            path { d: "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" }
        },
        Icon::Star => rsx! {
            path { d: "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_icons_map_onto_card_icons() {
        assert_eq!(Icon::from(ChipIcon::Coffee), Icon::Coffee);
        assert_eq!(Icon::from(ChipIcon::Wand), Icon::Wand);
        assert_eq!(Icon::from(ChipIcon::Music), Icon::Music);
    }
}
