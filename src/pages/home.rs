use yew::prelude::*;

use crate::Page;

struct Feature {
    title: &'static str,
    description: &'static str,
    page: Page,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Odds Calculator",
        description: "Calculate potential payouts and implied probabilities for your bets.",
        page: Page::Calculator,
    },
    Feature {
        title: "Bet Glossary",
        description: "Learn about different types of bets and betting terminology.",
        page: Page::Glossary,
    },
    Feature {
        title: "Bet Slip Simulator",
        description: "Practice placing bets and see potential outcomes.",
        page: Page::Simulator,
    },
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <main class="page wide">
            <div class="hero">
                <h1>{"Welcome to Bet Buddy"}</h1>
                <p>{"Your companion for smarter sports betting"}</p>
            </div>
            <div class="grid">
                { for FEATURES.iter().map(|feature| {
                    let on_navigate = props.on_navigate.clone();
                    let page = feature.page;
                    let onclick = Callback::from(move |_| on_navigate.emit(page));
                    html! {
                        <button class="card feature" {onclick}>
                            <h2>{ feature.title }</h2>
                            <p>{ feature.description }</p>
                        </button>
                    }
                })}
            </div>
        </main>
    }
}
