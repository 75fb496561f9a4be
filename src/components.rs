//! Pure Yew view components for the stopwatch UI.
//!
//! This module contains stateless components that render based on props;
//! all session state lives in the root component.

use crate::config;
use lapwatch::{format_ms_to_minseccs, split_ms, LapView};
use yew::prelude::*;

/// Build an inline text-color style from a palette entry.
fn color_style(color: &str) -> String {
    format!("color: {}", color)
}

/// Highlight color for a lap row, `None` for regular rows. When a lap is
/// both fastest and slowest at once, the slowest color takes precedence.
fn highlight_color(view: &LapView) -> Option<&'static str> {
    if view.slowest {
        Some(config::SLOWEST_COLOR)
    } else if view.fastest {
        Some(config::FASTEST_COLOR)
    } else {
        None
    }
}

/// Renders a millisecond count as `MM:SS,CC` in three fixed spans so the
/// digits do not shift while the clock runs. Screen readers get the joined
/// string through the element's label instead of three fragments.
#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub interval: u64,
    #[prop_or_default]
    pub class: Classes,
    /// Text color override; inherits from the stylesheet when `None`.
    #[prop_or_default]
    pub color: Option<&'static str>,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    let parts = split_ms(props.interval);
    let style = props.color.map(color_style);
    html! {
        <div
            class={classes!("timer", props.class.clone())}
            role="timer"
            aria-label={format_ms_to_minseccs(props.interval)}
            {style}
        >
            <span>{ format!("{:02}:", parts.minutes) }</span>
            <span>{ format!("{:02},", parts.seconds) }</span>
            <span>{ format!("{:02}", parts.centis) }</span>
        </div>
    }
}

/// Round control button colored per action, with the thin inner ring.
#[derive(Properties, PartialEq)]
pub struct RoundButtonProps {
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(RoundButton)]
pub fn round_button(props: &RoundButtonProps) -> Html {
    let style = format!(
        "color: {}; background-color: {}",
        props.color, props.background
    );
    html! {
        <button
            class="round-button"
            {style}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            <div class="button-ring">{ props.label }</div>
        </button>
    }
}

/// Horizontal row spreading its buttons to the screen edges.
#[derive(Properties, PartialEq)]
pub struct ButtonRowProps {
    pub children: Children,
}

#[function_component(ButtonRow)]
pub fn button_row(props: &ButtonRowProps) -> Html {
    html! {
        <div class="buttons-row">{ props.children.clone() }</div>
    }
}

/// One lap table row: label on the left, interval on the right, both in
/// the highlight color when the lap is an extreme.
#[derive(Properties, PartialEq)]
pub struct LapRowProps {
    pub view: LapView,
}

#[function_component(LapRow)]
pub fn lap_row(props: &LapRowProps) -> Html {
    let view = props.view;
    let highlight = highlight_color(&view);
    let style = highlight.map(color_style);
    html! {
        <div class="lap-row">
            <span class="lap-label" {style}>{ format!("Lap {}", view.number) }</span>
            <TimerDisplay
                class={classes!("timer-lap")}
                interval={view.interval}
                color={highlight}
            />
        </div>
    }
}

/// Scrollable lap table, most recent lap first. Rows are keyed by lap
/// number so entries keep their identity as the list grows at the head.
#[derive(Properties, PartialEq)]
pub struct LapsTableProps {
    pub views: Vec<LapView>,
}

#[function_component(LapsTable)]
pub fn laps_table(props: &LapsTableProps) -> Html {
    html! {
        <div class="laps-table">
            { props.views.iter().map(|&view| {
                html! { <LapRow key={view.number} view={view} /> }
            }).collect::<Html>() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(fastest: bool, slowest: bool) -> LapView {
        LapView {
            number: 1,
            interval: 1_000,
            fastest,
            slowest,
        }
    }

    #[test]
    fn test_highlight_color_precedence() {
        assert_eq!(highlight_color(&view(false, false)), None);
        assert_eq!(
            highlight_color(&view(true, false)),
            Some(config::FASTEST_COLOR)
        );
        assert_eq!(
            highlight_color(&view(false, true)),
            Some(config::SLOWEST_COLOR)
        );
        // A tied lap is marked both ways; the row renders as slowest.
        assert_eq!(
            highlight_color(&view(true, true)),
            Some(config::SLOWEST_COLOR)
        );
    }

    #[test]
    fn test_color_style_builds_inline_rule() {
        assert_eq!(color_style("#4BC05F"), "color: #4BC05F");
    }

    #[test]
    fn test_timer_label_matches_span_parts() {
        // The accessible label and the three spans must give the same
        // reading for any interval.
        for ms in [0u64, 9, 83_560, 3_659_990] {
            let parts = split_ms(ms);
            assert_eq!(
                format_ms_to_minseccs(ms),
                format!(
                    "{:02}:{:02},{:02}",
                    parts.minutes, parts.seconds, parts.centis
                )
            );
        }
    }
}
