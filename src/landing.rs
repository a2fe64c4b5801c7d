use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Linear Transformations"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Watch a 2\u{d7}2 matrix reshape the plane. Enter a matrix or pick a preset, then see the grid, the unit square, and the basis vectors glide into their images."
                }
                Link {
                    to: Route::Visualizer {},
                    style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                    "Open the visualizer \u{2192}"
                }
            }

            // Feature grid
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; margin-top: 64px;",

                div {
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                        "Any 2\u{d7}2 matrix"
                    }
                    p {
                        style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Type the four entries yourself, or fill them with scale, rotation, shear, and mirror presets."
                    }
                }

                div {
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                        "Smooth animation"
                    }
                    p {
                        style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Each transformation eases from the current geometry to its image, then becomes the new baseline for the next one."
                    }
                }

                div {
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                        "Composable"
                    }
                    p {
                        style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Transformations stack: apply a rotation after a shear and watch the composition, or reset back to the identity."
                    }
                }
            }
        }
    }
}
