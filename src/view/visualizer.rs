//! Visualizer - the page wiring the controller to the browser event loop
//!
//! One async task per session: each iteration ticks the controller, lets
//! the signal-backed sink publish the frame, then yields to the host loop
//! for the frame interval. Controls stay disabled until the commit.

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::Route;
use crate::controller::{Controller, Step};
use crate::geometry::GeometryState;
use crate::math::Mat2;
use crate::view::SignalSink;
use super::matrix_input::{self, MatrixGrid};
use super::plot::Plot;

const BUTTON_STYLE: &str = "padding: 8px 16px; background: #3b82f6; color: white; \
    border: none; border-radius: 6px; cursor: pointer; font-size: 14px;";
const PRESET_STYLE: &str = "padding: 8px 16px; background: #374151; color: #e5e7eb; \
    border: none; border-radius: 6px; cursor: pointer; font-size: 14px;";
const FIELD_LABEL_STYLE: &str = "color: #9ca3af; font-size: 13px; font-family: monospace;";

const INVALID_MATRIX_MSG: &str = "Please enter valid numbers for the 2\u{d7}2 matrix.";

#[component]
pub fn Visualizer() -> Element {
    let mut controller = use_signal(Controller::new);
    let displayed = use_signal(GeometryState::default);

    let mut a11 = use_signal(|| "1".to_string());
    let mut a12 = use_signal(|| "0".to_string());
    let mut a21 = use_signal(|| "0".to_string());
    let mut a22 = use_signal(|| "1".to_string());
    let mut scale_entry = use_signal(|| "1.0".to_string());
    let mut rotate_entry = use_signal(|| "0".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut rng_seed = use_signal(|| 42u64);

    let busy = controller.read().is_busy();
    let det = matrix_input::read_matrix(&a11(), &a12(), &a21(), &a22())
        .map(|m| format!("{:.3}", m.determinant()));

    let on_transform = move |_| {
        error.set(None);
        let Some(m) = matrix_input::read_matrix(&a11(), &a12(), &a21(), &a22()) else {
            warn!("transform rejected: unparsable matrix entry");
            error.set(Some(INVALID_MATRIX_MSG.to_string()));
            return;
        };
        let requested = controller.write().request_transform(m);
        match requested {
            Ok(()) => {
                info!(?m, "transform started");
                spawn(async move {
                    let mut sink = SignalSink::new(displayed);
                    loop {
                        let step = controller.write().tick(&mut sink);
                        match step {
                            Step::Frame { interval_ms } => {
                                TimeoutFuture::new(interval_ms).await;
                            }
                            Step::Done => {
                                info!("transform committed");
                                break;
                            }
                            Step::Idle => break,
                        }
                    }
                });
            }
            Err(e) => {
                warn!("transform rejected: {e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    let on_reset = move |_| {
        let mut sink = SignalSink::new(displayed);
        match controller.write().reset(&mut sink) {
            Ok(()) => {
                matrix_input::fill_entries(&Mat2::IDENTITY, &mut a11, &mut a12, &mut a21, &mut a22);
                error.set(None);
                info!("reset to identity");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let on_scale = move |_| {
        let Some(k) = matrix_input::parse_entry_or(&scale_entry(), 1.0) else {
            error.set(Some("Please enter a valid scale factor.".to_string()));
            return;
        };
        error.set(None);
        matrix_input::fill_entries(&Mat2::scale(k), &mut a11, &mut a12, &mut a21, &mut a22);
    };

    let on_rotate = move |_| {
        let Some(deg) = matrix_input::parse_entry_or(&rotate_entry(), 0.0) else {
            error.set(Some("Please enter a valid angle in degrees.".to_string()));
            return;
        };
        error.set(None);
        matrix_input::fill_entries(&Mat2::rotation(deg), &mut a11, &mut a12, &mut a21, &mut a22);
    };

    let on_shear = move |_| {
        error.set(None);
        matrix_input::fill_entries(&Mat2::shear(1.0), &mut a11, &mut a12, &mut a21, &mut a22);
    };

    let on_mirror = move |_| {
        error.set(None);
        matrix_input::fill_entries(&Mat2::mirror_y(), &mut a11, &mut a12, &mut a21, &mut a22);
    };

    let on_random = move |_| {
        error.set(None);
        let seed = rng_seed() + 1;
        rng_seed.set(seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let m = Mat2::random(&mut rng);
        matrix_input::fill_entries(&m, &mut a11, &mut a12, &mut a21, &mut a22);
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center;",
                Link {
                    to: Route::Landing {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Home"
                }
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "Linear Transformations in \u{211d}\u{b2}"
                }
                if busy {
                    span {
                        style: "color: #f59e0b; font-size: 13px; font-family: monospace;",
                        "animating\u{2026}"
                    }
                }
            }

            // Matrix entry and actions
            div {
                style: "display: flex; gap: 24px; align-items: flex-start;",

                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    span { style: FIELD_LABEL_STYLE, "Matrix A (2\u{d7}2):" }
                    MatrixGrid { a11, a12, a21, a22, disabled: busy }
                    div {
                        style: "display: flex; flex-direction: column; gap: 6px;",
                        button { style: BUTTON_STYLE, disabled: busy, onclick: on_transform, "Transform" }
                        button { style: PRESET_STYLE, disabled: busy, onclick: on_reset, "Reset" }
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: auto auto auto; gap: 6px 10px; align-items: center;",
                    span { style: FIELD_LABEL_STYLE, "Scale:" }
                    input {
                        r#type: "text",
                        style: "width: 72px; padding: 6px 8px; background: #111827; color: #e5e7eb; border: 1px solid #2a2a4a; border-radius: 6px; font-family: monospace;",
                        value: "{scale_entry}",
                        disabled: busy,
                        oninput: move |e: Event<FormData>| scale_entry.set(e.value()),
                    }
                    button { style: PRESET_STYLE, disabled: busy, onclick: on_scale, "Scale" }

                    span { style: FIELD_LABEL_STYLE, "Rotate (\u{b0}):" }
                    input {
                        r#type: "text",
                        style: "width: 72px; padding: 6px 8px; background: #111827; color: #e5e7eb; border: 1px solid #2a2a4a; border-radius: 6px; font-family: monospace;",
                        value: "{rotate_entry}",
                        disabled: busy,
                        oninput: move |e: Event<FormData>| rotate_entry.set(e.value()),
                    }
                    button { style: PRESET_STYLE, disabled: busy, onclick: on_rotate, "Rotate" }

                    span {}
                    span {}
                    button { style: PRESET_STYLE, disabled: busy, onclick: on_shear, "Shear" }

                    span {}
                    span {}
                    button { style: PRESET_STYLE, disabled: busy, onclick: on_mirror, "Mirror (y-Axis)" }

                    span {}
                    span {}
                    button { style: PRESET_STYLE, disabled: busy, onclick: on_random, "Random" }
                }
            }

            if let Some(msg) = error() {
                div {
                    style: "color: #fca5a5; background: #450a0a; border: 1px solid #7f1d1d; border-radius: 6px; padding: 8px 16px; font-size: 14px;",
                    "{msg}"
                }
            }

            if let Some(det) = det {
                span {
                    style: FIELD_LABEL_STYLE,
                    "det(A) = {det}"
                }
            }

            Plot { state: displayed() }
        }
    }
}
