//! Hero Banner Component
//!
//! Title over the embedded 3D scene.

use leptos::prelude::*;

/// Spline scene shown behind the title
const SCENE_URL: &str = "https://prod.spline.design/qQUip0dJPqrrPryE/scene.splinecode";

const TAGLINE: &str =
    "Turn habits into a clear roadmap with resources, AI guidance, and visual progress.";

#[component]
pub fn Hero() -> impl IntoView {
    // <spline-viewer> is a web component loaded from index.html
    let scene = format!(r#"<spline-viewer url="{SCENE_URL}"></spline-viewer>"#);

    view! {
        <header class="hero">
            <div class="hero-scene" inner_html=scene></div>
            <div class="hero-fade"></div>
            <div class="hero-text">
                <h1>"Habit Genius"</h1>
                <p>{TAGLINE}</p>
            </div>
        </header>
    }
}
