use leptos::prelude::*;

/// Admin sign-in card. `email` refills the field after a failed attempt.
pub fn login_page(email: String) -> impl IntoView {
    view! {
        <section class="login-card">
            <h1>"Admin Login"</h1>
            <p class="login-hint">"Sign in to manage the portfolio."</p>
            <form class="form" method="post" action="/login">
                <label class="form-field">
                    <span>"Email"</span>
                    <input type="email" name="email" value=email placeholder="admin@example.com"/>
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input type="password" name="password" placeholder="Your password"/>
                </label>
                <div class="form-actions">
                    <a class="btn btn-muted" href="/">"Back to site"</a>
                    <button type="submit" class="btn btn-solid">"Login"</button>
                </div>
            </form>
        </section>
    }
}
