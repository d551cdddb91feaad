use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"Page not found"</h1>
            <p>"The page you're looking for doesn't exist or has moved."</p>
            <a class="btn" href="/">"Go home"</a>
        </div>
    }
}
