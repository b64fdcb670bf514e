use gloo::timers::callback::Timeout;
use gloo::utils::{document, window};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::glossary::{Category, Prefill, Term, QUICK_TIPS, TERMS};
use crate::storage;

fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64).floor() as usize
}

fn share_term(term: &Term) {
    let text = format!(
        "Check out this betting term: {} - {}",
        term.name, term.definition
    );
    let _ = window().navigator().clipboard().write_text(&text);
    gloo::dialogs::alert("Term copied to clipboard!");
}

#[derive(Properties, PartialEq)]
pub struct GlossaryProps {
    pub on_try_term: Callback<Prefill>,
}

#[function_component(Glossary)]
pub fn glossary(props: &GlossaryProps) -> Html {
    let search = use_state(String::new);
    let category = use_state(|| None::<Category>);
    let expanded = use_state(|| None::<&'static str>);
    let learned = use_state(storage::learned_terms);
    let answers = use_state(storage::quiz_answers);
    let tip = use_state(|| None::<&'static str>);

    let query = search.to_lowercase();
    let visible: Vec<&'static Term> = TERMS
        .iter()
        .filter(|term| {
            let matches_search = query.is_empty()
                || term.name.to_lowercase().contains(&query)
                || term.definition.to_lowercase().contains(&query);
            let matches_category = category.map_or(true, |c| term.category == c);
            matches_search && matches_category
        })
        .collect();

    // Stale names from older catalogs don't count toward progress.
    let learned_count = TERMS.iter().filter(|t| learned.contains(t.name)).count();
    let progress = ((learned_count as f64 / TERMS.len() as f64) * 100.0).round() as u32;

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            search.set(target.value());
        })
    };
    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let idx = target.selected_index();
            // Index 0 is "All Categories".
            category.set(if idx > 0 {
                Category::all().get((idx - 1) as usize).copied()
            } else {
                None
            });
        })
    };
    let on_quick_tip = {
        let tip = tip.clone();
        Callback::from(move |_| {
            tip.set(Some(QUICK_TIPS[random_index(QUICK_TIPS.len())]));
            let tip = tip.clone();
            Timeout::new(5_000, move || tip.set(None)).forget();
        })
    };
    let on_surprise = {
        let expanded = expanded.clone();
        Callback::from(move |_| {
            let term = &TERMS[random_index(TERMS.len())];
            expanded.set(Some(term.name));
            if let Some(element) = document().get_element_by_id(&format!("term-{}", term.name)) {
                element.scroll_into_view();
            }
        })
    };

    html! {
        <main class="page wide">
            <header class="page-header">
                <h1>{"Betting Glossary"}</h1>
                <div class="row">
                    <button class="accent" onclick={on_quick_tip} title="Show a quick betting tip">
                        {"Quick Tip"}
                    </button>
                    <button class="primary" onclick={on_surprise} title="Jump to a random term">
                        {"Surprise Me"}
                    </button>
                </div>
            </header>

            <section class="progress" aria-label="Learning progress">
                <div class="progress-label">
                    <span>{"Learning Progress"}</span>
                    <span>{ format!("{progress}%") }</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {progress}%")}></div>
                </div>
            </section>

            <section class="filters">
                <input
                    type="text"
                    placeholder="Search terms..."
                    value={(*search).clone()}
                    oninput={on_search}
                    aria-label="Search terms" />
                <select onchange={on_category_change} aria-label="Filter by category">
                    <option selected={category.is_none()}>{"All Categories"}</option>
                    { for Category::all().iter().map(|c| {
                        html! { <option selected={*category == Some(*c)}>{ c.label() }</option> }
                    })}
                </select>
            </section>

            { if let Some(text) = *tip {
                html! { <aside class="toast" role="status">{ text }</aside> }
            } else { html!{} }}

            <section class="grid">
                { for visible.iter().map(|&term| {
                    let is_expanded = *expanded == Some(term.name);
                    let is_learned = learned.contains(term.name);

                    let on_toggle_expand = {
                        let expanded = expanded.clone();
                        Callback::from(move |_| {
                            expanded.set(if is_expanded { None } else { Some(term.name) });
                        })
                    };
                    let on_share = Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        share_term(term);
                    });
                    let on_toggle_learned = {
                        let learned = learned.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            let mut next = (*learned).clone();
                            if !next.insert(term.name.to_string()) {
                                next.remove(term.name);
                            }
                            storage::save_learned_terms(&next);
                            learned.set(next);
                        })
                    };
                    let on_try = {
                        let on_try_term = props.on_try_term.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            on_try_term.emit(term.prefill);
                        })
                    };

                    let answer = answers.get(term.name).cloned();
                    let answered_correctly = answer.as_deref() == Some(term.quiz.answer);

                    html! {
                        <article
                            id={format!("term-{}", term.name)}
                            class={if is_expanded { "card term expanded" } else { "card term" }}
                            onclick={on_toggle_expand}>
                            <div class="term-head">
                                <span class="emoji">{ term.emoji }</span>
                                <div class="term-title">
                                    <h2>{ term.name }</h2>
                                    <span class="category">{ term.category.label() }</span>
                                </div>
                                <div class="term-badges">
                                    { if is_learned {
                                        html! { <span class="badge">{"Learned"}</span> }
                                    } else { html!{} }}
                                    <button
                                        class="icon-button"
                                        onclick={on_share}
                                        aria-label={format!("Share {}", term.name)}
                                        title="Share term">
                                        {"⤴"}
                                    </button>
                                </div>
                            </div>
                            <p class="definition">{ term.definition }</p>
                            { if is_expanded {
                                html! {
                                    <div class="term-body">
                                        <div class="example">
                                            <strong>{"Example: "}</strong>{ term.example }
                                        </div>
                                        <button class="primary" onclick={on_try} title="Try this term in the calculator">
                                            {"Try This Term"}
                                        </button>
                                        <button class="accent" onclick={on_toggle_learned}>
                                            { if is_learned { "Mark as Unlearned" } else { "Mark as Learned" } }
                                        </button>
                                        <div class="quiz">
                                            <p class="quiz-question">
                                                <strong>{"Quiz: "}</strong>{ term.quiz.question }
                                            </p>
                                            { for term.quiz.choices.iter().map(|&choice| {
                                                let picked = answer.as_deref() == Some(choice);
                                                let class = if picked && choice == term.quiz.answer {
                                                    "quiz-choice correct"
                                                } else if picked {
                                                    "quiz-choice incorrect"
                                                } else {
                                                    "quiz-choice"
                                                };
                                                let on_answer = {
                                                    let answers = answers.clone();
                                                    Callback::from(move |e: MouseEvent| {
                                                        e.stop_propagation();
                                                        let mut next = (*answers).clone();
                                                        next.insert(term.name.to_string(), choice.to_string());
                                                        storage::save_quiz_answers(&next);
                                                        answers.set(next);
                                                    })
                                                };
                                                html! {
                                                    <button {class} onclick={on_answer} disabled={answered_correctly}>
                                                        { choice }
                                                    </button>
                                                }
                                            })}
                                            { if answered_correctly {
                                                html! { <p class="quiz-feedback correct">{"Correct! 🎉"}</p> }
                                            } else if answer.is_some() {
                                                html! { <p class="quiz-feedback incorrect">{"Incorrect. Try again!"}</p> }
                                            } else { html!{} }}
                                        </div>
                                    </div>
                                }
                            } else { html!{} }}
                        </article>
                    }
                })}
            </section>
        </main>
    }
}
