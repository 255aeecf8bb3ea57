use leptos::prelude::*;

/// Admin sign-in form. Submits as a plain form post to a fixed path;
/// credential handling lives upstream of this service.
#[component]
pub fn LoginForm() -> impl IntoView {
    view! {
        <form class="login-form" method="post" action="/admin/session">
            <label class="login-field">
                "Email"
                <input type="email" name="email" autocomplete="username" required/>
            </label>
            <label class="login-field">
                "Password"
                <input type="password" name="password" autocomplete="current-password" required/>
            </label>
            <button type="submit" class="login-submit">"Sign in"</button>
        </form>
    }
}
