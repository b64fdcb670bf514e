mod glossary;
mod odds;
mod pages;
mod storage;

use gloo::utils::window;
use yew::prelude::*;

use crate::glossary::Prefill;
use crate::pages::{Calculator, Glossary, Home, Simulator};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Calculator,
    Glossary,
    Simulator,
}

impl Page {
    fn all() -> &'static [(Self, &'static str)] {
        &[
            (Self::Home, "Home"),
            (Self::Calculator, "Calculator"),
            (Self::Glossary, "Glossary"),
            (Self::Simulator, "Simulator"),
        ]
    }
}

fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    current: Page,
    on_navigate: Callback<Page>,
    dark: bool,
    on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav>
            <span class="brand">{"Bet Buddy"}</span>
            <div class="nav-links">
                { for Page::all().iter().map(|(target, name)| {
                    let on_navigate = props.on_navigate.clone();
                    let target = *target;
                    let onclick = Callback::from(move |_| on_navigate.emit(target));
                    let class = if target == props.current { "nav-link active" } else { "nav-link" };
                    html! { <button {class} {onclick}>{ *name }</button> }
                })}
            </div>
            <button
                class="icon-button"
                onclick={props.on_toggle_theme.reform(|_: MouseEvent| ())}
                aria-label="Toggle dark mode">
                { if props.dark { "☀" } else { "☾" } }
            </button>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Home);
    let dark = use_state(|| storage::dark_mode().unwrap_or_else(prefers_dark));
    // Calculator seed handed over by the glossary; cleared on plain
    // navigation so the calculator starts blank.
    let prefill = use_state(|| None::<Prefill>);

    let on_navigate = {
        let page = page.clone();
        let prefill = prefill.clone();
        Callback::from(move |target: Page| {
            prefill.set(None);
            page.set(target);
        })
    };
    let on_toggle_theme = {
        let dark = dark.clone();
        Callback::from(move |_| {
            let next = !*dark;
            storage::save_dark_mode(next);
            dark.set(next);
        })
    };
    let on_try_term = {
        let page = page.clone();
        let prefill = prefill.clone();
        Callback::from(move |seed: Prefill| {
            prefill.set(Some(seed));
            page.set(Page::Calculator);
        })
    };

    let content = match *page {
        Page::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
        Page::Calculator => html! { <Calculator prefill={*prefill} /> },
        Page::Glossary => html! { <Glossary on_try_term={on_try_term} /> },
        Page::Simulator => html! { <Simulator /> },
    };

    html! {
        <div class={if *dark { "app dark" } else { "app" }}>
            <NavBar current={*page} on_navigate={on_navigate} dark={*dark} {on_toggle_theme} />
            { content }
            <footer>
                {"Remember to bet responsibly and never risk more than you can afford to lose."}
            </footer>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
