//! Main module for the lap timer application using Yew.
//! Wires the session reducer, the periodic tick, and the UI components.

use gloo_timers::callback::Interval;
use lapwatch::{now_ms, Phase, Session, SessionAction};
use yew::prelude::*;

mod components;
mod config;

use components::{ButtonRow, LapsTable, RoundButton, TimerDisplay};
use config::*;

/// Primary application component wiring session state, the tick effect,
/// and the phase-dependent controls.
#[function_component(App)]
fn app() -> Html {
    let session = use_reducer(Session::new);

    // Drive the display while a segment is live. The interval handle is
    // owned by the effect destructor: leaving the running phase (or
    // unmounting) cancels it, while a lap keeps the dependency `true` and
    // the ticker untouched.
    {
        let session = session.clone();
        use_effect_with(session.is_running(), move |&running| {
            let ticker = running.then(|| {
                Interval::new(TICK_INTERVAL_MS, move || {
                    session.dispatch(SessionAction::Tick { at: now_ms() });
                })
            });
            move || drop(ticker)
        });
    }

    let on_start = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Start { at: now_ms() }))
    };
    let on_lap = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Lap { at: now_ms() }))
    };
    let on_stop = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Stop))
    };
    let on_resume = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Resume { at: now_ms() }))
    };
    let on_reset = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::Reset))
    };

    html! {
        <div class="container">
            <TimerDisplay class={classes!("timer-main")} interval={session.total_elapsed()} />

            { match session.phase() {
                Phase::Idle => html! {
                    <ButtonRow>
                        <RoundButton
                            label="Lap"
                            color={LAP_DISABLED_COLOR}
                            background={LAP_DISABLED_BACKGROUND}
                            disabled={true}
                        />
                        <RoundButton
                            label="Start"
                            color={START_COLOR}
                            background={START_BACKGROUND}
                            onclick={on_start}
                        />
                    </ButtonRow>
                },
                Phase::Running => html! {
                    <ButtonRow>
                        <RoundButton
                            label="Lap"
                            color={LAP_COLOR}
                            background={LAP_BACKGROUND}
                            onclick={on_lap}
                        />
                        <RoundButton
                            label="Stop"
                            color={STOP_COLOR}
                            background={STOP_BACKGROUND}
                            onclick={on_stop}
                        />
                    </ButtonRow>
                },
                Phase::Stopped => html! {
                    <ButtonRow>
                        <RoundButton
                            label="Reset"
                            color={LAP_COLOR}
                            background={LAP_BACKGROUND}
                            onclick={on_reset}
                        />
                        <RoundButton
                            label="Start"
                            color={START_COLOR}
                            background={START_BACKGROUND}
                            onclick={on_resume}
                        />
                    </ButtonRow>
                },
            } }

            <LapsTable views={session.lap_views()} />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the root component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
